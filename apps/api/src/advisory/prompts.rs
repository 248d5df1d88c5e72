// LLM prompt constants for the advisory panel.
// Reuses the JSON-only system fragment from llm_client::prompts.

use serde_json::{json, Value};

use crate::advisory::AdvisoryRequest;

/// Advisory prompt template. Every `{placeholder}` is replaced before sending.
pub const ADVISORY_PROMPT_TEMPLATE: &str = r#"You are an expert Australian Migration Agent.
Analyze the current situation for the occupation: "{title}" (ANZSCO Code: {code}).

Key Data Points:
- Recent 189 Invitation Score: {score189} points
- Current Active Applications (Backlog): {applications}
- Total Invitations Issued (Last 12 Months): {invitations}

Provide:
1. A brief 2-sentence analysis of the competition, considering the score and the backlog volume.
2. Three distinct, actionable bullet points on how an applicant can improve their chances.

Return a JSON object with this EXACT schema (no extra fields):
{"summary": "...", "advice": ["...", "...", "..."]}"#;

pub fn build_advisory_prompt(request: &AdvisoryRequest) -> String {
    ADVISORY_PROMPT_TEMPLATE
        .replace("{title}", &request.title)
        .replace("{code}", &request.code)
        .replace("{score189}", &request.latest_score189.to_string())
        .replace("{applications}", &request.latest_applications.to_string())
        .replace("{invitations}", &request.invitations_last_12_months.to_string())
}

/// Structured-output schema handed to Gemini alongside the prompt.
pub fn advisory_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "advice": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        },
        "required": ["summary", "advice"]
    })
}
