//! Report prompt template

/// Build the configuration-report prompt from an intent and retrieved context
pub fn build_prompt(intent: &str, context: &str) -> String {
    format!(
        r#"
You are an expert network engineer AI assistant. Translate the high-level intent into specific, error-free device configurations.

Intent:
{}

Knowledge Base:
{}

Tasks:
1. Generate device commands and configurations.
2. Validate commands syntactically.
3. Suggest optimization if needed.
4. Provide concise explanation for each configuration.

Return a structured report.
"#,
        intent, context
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_sections_in_order() {
        let prompt = build_prompt("Set up branch office VPN", "VPN setup requires X.");

        let intent_at = prompt.find("Intent:\nSet up branch office VPN").unwrap();
        let context_at = prompt.find("Knowledge Base:\nVPN setup requires X.").unwrap();
        let tasks_at = prompt.find("Tasks:\n1. Generate device commands").unwrap();
        assert!(intent_at < context_at && context_at < tasks_at);
        assert!(prompt.contains("2. Validate commands syntactically."));
        assert!(prompt.contains("3. Suggest optimization if needed."));
        assert!(prompt.contains("4. Provide concise explanation for each configuration."));
        assert!(prompt.trim_end().ends_with("Return a structured report."));
    }

    #[test]
    fn test_intent_is_inserted_verbatim() {
        let intent = "Block {telnet} on VLAN 10 & log";
        assert!(build_prompt(intent, "").contains(intent));
    }
}
