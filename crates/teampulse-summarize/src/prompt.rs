//! Prompt contract for the feedback digest.

/// Upper bound on entries in each summary collection (and on keywords per quote).
pub const MAX_ENTRIES: usize = 3;

/// Build the single prompt that carries every selected comment verbatim.
pub fn build_summary_prompt(comments: &[String]) -> String {
    format!(
        "You are summarizing anonymous feedback about a trainer's sessions.\n\
         Analyze the comments below and return ONLY a valid JSON object with exactly \
         two keys: \"positiveFeedback\" and \"improvementAreas\".\n\
         - \"positiveFeedback\": an array of at most {max} objects of the form \
         {{\"quote\": string, \"keywords\": string[]}}. Each quote must be copied verbatim \
         from the comments, choosing the most positive ones. \"keywords\" holds 1 to {max} \
         short words or phrases capturing why the quote is positive.\n\
         - \"improvementAreas\": an array of at most {max} objects of the form \
         {{\"theme\": string, \"suggestion\": string}}, one per distinct area for \
         improvement, with a short actionable suggestion.\n\
         If there are fewer than {max} items for a key, return what you can. If there are \
         none, return an empty array.\n\
         Comments: \"\"\"{comments}\"\"\"",
        max = MAX_ENTRIES,
        comments = comments.join("\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_comments_verbatim() {
        let comments = vec!["Great session".to_string(), "Too fast {honestly}".to_string()];
        let prompt = build_summary_prompt(&comments);
        assert!(prompt.contains("\"\"\"Great session\nToo fast {honestly}\"\"\""));
        assert!(prompt.contains("\"positiveFeedback\""));
        assert!(prompt.contains("\"improvementAreas\""));
        assert!(prompt.contains("at most 3"));
    }
}
