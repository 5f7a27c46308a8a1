//! Prompt contract for schema-constrained extraction
//!
//! The template is static: a fixed system instruction, then the raw content
//! fenced between delimiter lines so instruction and data cannot be
//! confused. Pure functions of their inputs, no side effects.

use tradenote_domain::ChatMessage;

const SYSTEM_INSTRUCTION: &str = "You are an expert assistant for extracting insights from email in JSON format.\n\
You extract data and return it in JSON format, according to the provided JSON schema, from the given email message.\n\
REMEMBER to return extracted data only from the provided email message. Do not invent fields or values that are not present.";

/// Delimiter fencing the raw content inside the user message
const CONTENT_FENCE: &str = "------";

/// Render the message sequence for one extraction.
///
/// Always two messages: the fixed system instruction followed by a user
/// message embedding `content` between fence lines.
pub fn render_prompt(content: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_INSTRUCTION),
        ChatMessage::user(format!(
            "Email Message:\n{fence}\n{content}\n{fence}",
            fence = CONTENT_FENCE,
            content = content
        )),
    ]
}

/// Render a corrective follow-up after a schema validation failure.
///
/// Replays the original messages, the model's invalid payload as an
/// assistant turn, and one corrective user instruction naming the parse
/// error. Used for the single bounded retry, when enabled.
pub fn render_corrective(
    original: &[ChatMessage],
    invalid_payload: &str,
    reason: &str,
) -> Vec<ChatMessage> {
    let mut messages = original.to_vec();
    messages.push(ChatMessage::assistant(invalid_payload));
    messages.push(ChatMessage::user(format!(
        "The previous reply did not conform to the JSON schema: {}.\n\
         Return corrected JSON for the same email message, matching the schema exactly.",
        reason
    )));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradenote_domain::Role;

    #[test]
    fn test_system_message_comes_first() {
        let messages = render_prompt("some content");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1].role, Role::User);
    }

    #[test]
    fn test_content_is_fenced() {
        let messages = render_prompt("ARKK bought 100 shares of AAPL");
        let user = &messages[1].content;
        assert!(user.contains("------\nARKK bought 100 shares of AAPL\n------"));
    }

    #[test]
    fn test_system_instruction_is_static() {
        let a = render_prompt("first");
        let b = render_prompt("second");
        assert_eq!(a[0], b[0]);
    }

    #[test]
    fn test_instruction_forbids_invention() {
        let messages = render_prompt("content");
        assert!(messages[0]
            .content
            .contains("only from the provided email message"));
    }

    #[test]
    fn test_corrective_appends_two_messages() {
        let original = render_prompt("content");
        let followup = render_corrective(&original, "{bad json", "missing field `etfs`");

        assert_eq!(followup.len(), 4);
        assert_eq!(followup[2].role, Role::Assistant);
        assert_eq!(followup[2].content, "{bad json");
        assert_eq!(followup[3].role, Role::User);
        assert!(followup[3].content.contains("missing field `etfs`"));
    }
}
