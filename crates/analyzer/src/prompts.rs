use serde_json::{Value, json};
use storage::models::{Hackathon, Team};

/// Lower than the service default so repeated grading of the same team stays consistent.
pub const ANALYSIS_TEMPERATURE: f32 = 0.5;

pub struct PromptBuilder;

impl PromptBuilder {
    pub fn team_balance_prompt(team: &Team, hackathon: &Hackathon) -> String {
        format!(
            r#"Analyze the balance of a hackathon team against the hackathon's requirements.

Hackathon Details:
- Title: "{title}"
- Theme: "{theme}"
- Required Skills: {required}

Team Details:
- Team Name: "{team}"
- Team Members: {members}
- Combined Team Skills: {skills}

Return your analysis as JSON:
1. "score": a number from 0 to 100. High means the team is well balanced and covers the required skills; low means significant skill gaps.
2. "summary": one concise sentence on the team's balance.
3. "missingSkills": the most critical required skills the team lacks. Use an empty array if none are missing.
4. "suggestions": concrete, actionable advice for improving the team, such as the kind of member to recruit."#,
            title = hackathon.title,
            theme = hackathon.theme,
            required = hackathon.required_skills.join(", "),
            team = team.name,
            members = team.member_names().join(", "),
            skills = team.combined_skills().join(", "),
        )
    }

    /// Output contract passed to the completion service.
    pub fn response_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "score": {
                    "type": "NUMBER",
                    "description": "A score from 0 to 100 for how well the team's skills match the hackathon's requirements."
                },
                "summary": {
                    "type": "STRING",
                    "description": "A one-sentence summary of the team's strengths and weaknesses for this hackathon."
                },
                "missingSkills": {
                    "type": "ARRAY",
                    "description": "Critical skills required by the hackathon that the team is missing.",
                    "items": { "type": "STRING" }
                },
                "suggestions": {
                    "type": "STRING",
                    "description": "Actionable suggestions for improving the team."
                }
            },
            "required": ["score", "summary", "missingSkills", "suggestions"]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{hackathon, member, team};

    #[test]
    fn test_prompt_embeds_hackathon_and_team() {
        let team = team(
            10,
            "Byte Me",
            vec![
                member(1, "Ada", &["React", "Node.js"]),
                member(2, "Grace", &["Python", "React"]),
            ],
        );
        let hackathon = hackathon(&["React", "Figma", "MongoDB"]);

        let prompt = PromptBuilder::team_balance_prompt(&team, &hackathon);

        assert!(prompt.contains("- Title: \"HackTheFuture\""));
        assert!(prompt.contains("- Theme: \"AI for Social Good\""));
        assert!(prompt.contains("- Required Skills: React, Figma, MongoDB"));
        assert!(prompt.contains("- Team Name: \"Byte Me\""));
        assert!(prompt.contains("- Team Members: Ada, Grace"));
        assert!(prompt.contains("- Combined Team Skills: React, Node.js, Python\n"));
    }

    #[test]
    fn test_schema_requires_all_fields() {
        let schema = PromptBuilder::response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();

        assert_eq!(required, vec!["score", "summary", "missingSkills", "suggestions"]);
        assert_eq!(schema["properties"]["score"]["type"], "NUMBER");
        assert_eq!(schema["properties"]["missingSkills"]["items"]["type"], "STRING");
    }
}
