//! Compiled-in occupation table. Pure data: every occupation the dashboard
//! tracks, with the base parameters the series generator works from.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of occupation groupings shown in the category selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Business,
    Education,
    Engineering,
    Health,
    #[serde(rename = "ICT")]
    Ict,
    Legal,
    Science,
    Trades,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "Business",
            Category::Education => "Education",
            Category::Engineering => "Engineering",
            Category::Health => "Health",
            Category::Ict => "ICT",
            Category::Legal => "Legal",
            Category::Science => "Science",
            Category::Trades => "Trades",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the static table. `base_score` is the central tendency of the
/// generated 189 scores, `base_volume` the central tendency of the backlog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupationDefinition {
    pub code: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub base_score: i32,
    pub base_volume: i32,
}

const fn def(
    code: &'static str,
    title: &'static str,
    category: Category,
    base_score: i32,
    base_volume: i32,
) -> OccupationDefinition {
    OccupationDefinition {
        code,
        title,
        category,
        base_score,
        base_volume,
    }
}

/// Reference dataset, in display order.
pub static DEFINITIONS: &[OccupationDefinition] = &[
    // ICT & Technology
    def("261111", "ICT Business Analyst", Category::Ict, 85, 2500),
    def("261112", "Systems Analyst", Category::Ict, 85, 1800),
    def("261311", "Analyst Programmer", Category::Ict, 85, 2000),
    def("261312", "Developer Programmer", Category::Ict, 85, 2200),
    def("261313", "Software Engineer", Category::Ict, 85, 3500),
    def("261314", "Software Tester", Category::Ict, 90, 1200),
    def("261399", "Software and Applications Programmers nec", Category::Ict, 90, 1000),
    def("262111", "Database Administrator", Category::Ict, 85, 800),
    def("262112", "ICT Security Specialist", Category::Ict, 90, 1500),
    def("262113", "SystemsAdministrator", Category::Ict, 85, 900),
    def("263111", "Computer Network and Systems Engineer", Category::Ict, 80, 1600),
    def("263112", "Network Administrator", Category::Ict, 80, 700),
    def("263113", "Network Analyst", Category::Ict, 80, 600),
    def("263212", "ICT Support Engineer", Category::Ict, 80, 500),
    def("135112", "ICT Project Manager", Category::Ict, 85, 1300),
    def("261211", "Multimedia Specialist", Category::Ict, 85, 400),
    def("261212", "Web Developer", Category::Ict, 85, 1100),
    // Engineering
    def("233111", "Chemical Engineer", Category::Engineering, 85, 600),
    def("233112", "Materials Engineer", Category::Engineering, 85, 300),
    def("233211", "Civil Engineer", Category::Engineering, 85, 2800),
    def("233212", "Geotechnical Engineer", Category::Engineering, 85, 400),
    def("233213", "Quantity Surveyor", Category::Engineering, 80, 500),
    def("233214", "Structural Engineer", Category::Engineering, 85, 600),
    def("233215", "Transport Engineer", Category::Engineering, 85, 300),
    def("233311", "Electrical Engineer", Category::Engineering, 85, 1400),
    def("233411", "Electronics Engineer", Category::Engineering, 85, 900),
    def("233511", "Industrial Engineer", Category::Engineering, 85, 500),
    def("233512", "Mechanical Engineer", Category::Engineering, 85, 1900),
    def("233513", "Production or Plant Engineer", Category::Engineering, 85, 400),
    def("233611", "Mining Engineer (Excluding Petroleum)", Category::Engineering, 85, 300),
    def("233612", "Petroleum Engineer", Category::Engineering, 90, 200),
    def("233911", "Aeronautical Engineer", Category::Engineering, 85, 300),
    def("233913", "Biomedical Engineer", Category::Engineering, 85, 400),
    def("233914", "Engineering Technologist", Category::Engineering, 90, 1100),
    def("233915", "Environmental Engineer", Category::Engineering, 85, 500),
    def("233916", "Naval Architect", Category::Engineering, 80, 100),
    def("312211", "Civil Engineering Draftsperson", Category::Engineering, 75, 400),
    def("312311", "Electrical Engineering Draftsperson", Category::Engineering, 75, 300),
    def("313212", "Telecommunications Field Engineer", Category::Engineering, 80, 200),
    def("313213", "Telecommunications Network Planner", Category::Engineering, 80, 200),
    def("313214", "Telecommunications Technical Officer or Technologist", Category::Engineering, 80, 300),
    // Health & Medical
    def("254499", "Registered Nurse (NEC)", Category::Health, 70, 3000),
    def("254411", "Nurse Practitioner", Category::Health, 70, 200),
    def("254412", "Registered Nurse (Aged Care)", Category::Health, 65, 1500),
    def("254413", "Registered Nurse (Child and Family Health)", Category::Health, 65, 400),
    def("254414", "Registered Nurse (Community Health)", Category::Health, 65, 500),
    def("254415", "Registered Nurse (Critical Care and Emergency)", Category::Health, 65, 800),
    def("254416", "Registered Nurse (Developmental Disability)", Category::Health, 65, 200),
    def("254417", "Registered Nurse (Disability and Rehabilitation)", Category::Health, 65, 300),
    def("254418", "Registered Nurse (Medical)", Category::Health, 65, 1200),
    def("254422", "Registered Nurse (Mental Health)", Category::Health, 65, 600),
    def("254423", "Registered Nurse (Perioperative)", Category::Health, 65, 400),
    def("254424", "Registered Nurse (Surgical)", Category::Health, 65, 500),
    def("254425", "Registered Nurse (Paediatrics)", Category::Health, 65, 400),
    def("253111", "General Practitioner", Category::Health, 80, 1100),
    def("253112", "Resident Medical Officer", Category::Health, 85, 900),
    def("253999", "Medical Practitioners nec", Category::Health, 80, 300),
    def("251211", "Medical Diagnostic Radiographer", Category::Health, 75, 600),
    def("251511", "Hospital Pharmacist", Category::Health, 85, 700),
    def("251513", "Retail Pharmacist", Category::Health, 90, 800),
    def("252111", "Chiropractor", Category::Health, 70, 200),
    def("252312", "Dentist", Category::Health, 85, 900),
    def("252411", "Occupational Therapist", Category::Health, 70, 500),
    def("252511", "Physiotherapist", Category::Health, 75, 800),
    def("252611", "Podiatrist", Category::Health, 70, 200),
    def("252711", "Audiologist", Category::Health, 75, 200),
    def("252712", "Speech Pathologist", Category::Health, 75, 400),
    def("234511", "Life Scientist (General)", Category::Health, 80, 200),
    def("234611", "Medical Laboratory Scientist", Category::Health, 80, 700),
    def("234711", "Veterinarian", Category::Health, 75, 400),
    def("272311", "Clinical Psychologist", Category::Health, 75, 500),
    def("272312", "Educational Psychologist", Category::Health, 75, 200),
    def("272313", "Organisational Psychologist", Category::Health, 80, 100),
    def("272314", "Psychotherapist", Category::Health, 80, 150),
    def("272511", "Social Worker", Category::Health, 70, 1200),
    def("411111", "Ambulance Officer", Category::Health, 80, 300),
    // Education
    def("241111", "Early Childhood Teacher", Category::Education, 70, 1800),
    def("241213", "Primary School Teacher", Category::Education, 75, 1500),
    def("241311", "Middle School Teacher", Category::Education, 75, 600),
    def("241411", "Secondary School Teacher", Category::Education, 70, 2200),
    def("241511", "Special Needs Teacher", Category::Education, 70, 400),
    def("241512", "Teacher of the Hearing Impaired", Category::Education, 70, 100),
    def("241513", "Teacher of the Sight Impaired", Category::Education, 70, 100),
    def("241599", "Special Education Teachers nec", Category::Education, 75, 200),
    def("134111", "Child Care Centre Manager", Category::Education, 75, 300),
    // Business & Finance
    def("221111", "Accountant (General)", Category::Business, 95, 4500),
    def("221112", "Management Accountant", Category::Business, 95, 1200),
    def("221113", "Taxation Accountant", Category::Business, 95, 1000),
    def("221213", "External Auditor", Category::Business, 90, 1500),
    def("221214", "Internal Auditor", Category::Business, 90, 600),
    def("222112", "Finance Broker", Category::Business, 85, 400),
    def("222311", "Financial Investment Adviser", Category::Business, 85, 500),
    def("222312", "Financial Investment Manager", Category::Business, 90, 300),
    def("224711", "Management Consultant", Category::Business, 90, 2000),
    def("224999", "Information and Organisation Professionals nec", Category::Business, 90, 300),
    def("132211", "Finance Manager", Category::Business, 90, 800),
    def("225113", "Marketing Specialist", Category::Business, 90, 1800),
    def("223111", "Human Resource Adviser", Category::Business, 90, 900),
    def("132311", "Human Resource Manager", Category::Business, 95, 400),
    // Trades
    def("321111", "Automotive Electrician", Category::Trades, 70, 400),
    def("321211", "Motor Mechanic (General)", Category::Trades, 70, 1200),
    def("321212", "Diesel Motor Mechanic", Category::Trades, 70, 500),
    def("321213", "Motorcycle Mechanic", Category::Trades, 70, 200),
    def("321214", "Small Engine Mechanic", Category::Trades, 75, 150),
    def("322211", "Sheetmetal Trades Worker", Category::Trades, 75, 300),
    def("322311", "Metal Fabricator", Category::Trades, 75, 600),
    def("322313", "Welder (First Class)", Category::Trades, 75, 700),
    def("323211", "Fitter (General)", Category::Trades, 75, 800),
    def("323212", "Fitter and Turner", Category::Trades, 75, 600),
    def("323213", "Fitter - Welder", Category::Trades, 75, 400),
    def("323214", "Metal Machinist (First Class)", Category::Trades, 75, 500),
    def("324111", "Panelbeater", Category::Trades, 70, 300),
    def("324311", "Vehicle Painter", Category::Trades, 70, 250),
    def("331111", "Bricklayer", Category::Trades, 65, 500),
    def("331211", "Carpenter and Joiner", Category::Trades, 65, 800),
    def("331212", "Carpenter", Category::Trades, 65, 1500),
    def("331213", "Joiner", Category::Trades, 70, 400),
    def("332211", "Painting Trades Worker", Category::Trades, 65, 600),
    def("333111", "Glazier", Category::Trades, 70, 200),
    def("333211", "Fibrous Plasterer", Category::Trades, 70, 150),
    def("333212", "Solid Plasterer", Category::Trades, 70, 150),
    def("333411", "Wall and Floor Tiler", Category::Trades, 65, 400),
    def("334111", "Plumber (General)", Category::Trades, 75, 1000),
    def("334112", "Airconditioning and Mechanical Services Plumber", Category::Trades, 75, 300),
    def("334115", "Roof Plumber", Category::Trades, 75, 200),
    def("341111", "Electrician (General)", Category::Trades, 80, 1800),
    def("341112", "Electrician (Special Class)", Category::Trades, 80, 400),
    def("342111", "Airconditioning and Refrigeration Mechanic", Category::Trades, 75, 600),
    def("351311", "Chef", Category::Trades, 75, 2500),
    def("351411", "Cook", Category::Trades, 80, 1500),
    def("394111", "Cabinetmaker", Category::Trades, 70, 300),
    def("399111", "Boat Builder and Repairer", Category::Trades, 75, 100),
    def("399112", "Shipwright", Category::Trades, 75, 50),
    // Sciences & Other
    def("234111", "Agricultural Consultant", Category::Science, 75, 200),
    def("234112", "Agricultural Scientist", Category::Science, 75, 300),
    def("234211", "Chemist", Category::Science, 80, 400),
    def("234311", "Environmental Scientist", Category::Science, 80, 600),
    def("234411", "Geologist", Category::Science, 80, 300),
    def("234412", "Geophysicist", Category::Science, 80, 100),
    def("234914", "Physicist", Category::Science, 85, 100),
    def("232111", "Architect", Category::Science, 75, 1200),
    def("232112", "Landscape Architect", Category::Science, 75, 300),
    def("232212", "Surveyor", Category::Science, 75, 400),
    def("232213", "Cartographer", Category::Science, 75, 100),
    def("232214", "Other Spatial Scientist", Category::Science, 75, 100),
    def("272411", "Historian", Category::Science, 85, 50),
    def("272413", "Translator", Category::Science, 90, 600),
    // Legal
    def("271111", "Barrister", Category::Legal, 80, 200),
    def("271311", "Solicitor", Category::Legal, 80, 1400),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_codes_are_unique() {
        let codes: HashSet<_> = DEFINITIONS.iter().map(|d| d.code).collect();
        assert_eq!(codes.len(), DEFINITIONS.len());
    }

    #[test]
    fn test_table_covers_all_eight_categories() {
        let categories: HashSet<_> = DEFINITIONS.iter().map(|d| d.category).collect();
        assert_eq!(categories.len(), 8);
    }

    #[test]
    fn test_table_codes_have_numeric_prefix() {
        for d in DEFINITIONS {
            assert!(
                d.code.len() >= 4 && d.code[..4].bytes().all(|b| b.is_ascii_digit()),
                "bad code {}",
                d.code
            );
        }
    }

    #[test]
    fn test_ict_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Category::Ict).unwrap(), "\"ICT\"");
        assert_eq!(Category::Ict.to_string(), "ICT");
    }
}
