use super::errors::IdentificationError;
use super::model::IdentificationResult;

/// Pulls an [`IdentificationResult`] out of free-form model text.
///
/// Candidates are tried in order: every balanced top-level `{...}` object,
/// then the greedy first-`{`-to-last-`}` slice. The first candidate that
/// deserializes into the full contract wins.
pub fn parse_identification(text: &str) -> Result<IdentificationResult, IdentificationError> {
    let candidates = json_object_candidates(text);
    if candidates.is_empty() {
        return Err(IdentificationError::NoJsonFound);
    }

    let mut first_error = None;
    for candidate in candidates {
        match serde_json::from_str::<IdentificationResult>(candidate) {
            Ok(result) => return Ok(result),
            Err(err) if first_error.is_none() => first_error = Some(err.to_string()),
            Err(_) => {}
        }
    }

    Err(IdentificationError::InvalidJson(
        first_error.unwrap_or_default(),
    ))
}

/// Returns the JSON-looking fragments of `text`, most trustworthy first.
pub fn json_object_candidates(text: &str) -> Vec<&str> {
    let mut candidates = balanced_objects(text);

    let greedy = regex::Regex::new(r"\{[\s\S]*\}")
        .ok()
        .and_then(|re| re.find(text))
        .map(|m| m.as_str());
    if let Some(greedy) = greedy
        && !candidates.contains(&greedy)
    {
        candidates.push(greedy);
    }

    candidates
}

/// Scans for top-level objects whose braces balance, skipping braces that
/// appear inside JSON string literals. A `{` that never closes is skipped and
/// the scan resumes at the next one.
fn balanced_objects(text: &str) -> Vec<&str> {
    let mut objects = Vec::new();
    let mut offset = 0;

    while let Some(relative) = text[offset..].find('{') {
        let start = offset + relative;
        match closing_brace(text, start) {
            Some(end) => {
                objects.push(&text[start..=end]);
                offset = end + 1;
            }
            None => offset = start + 1,
        }
    }

    objects
}

/// Index of the `}` that closes the object opened at `start`, if any.
fn closing_brace(text: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (index, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + index);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const NOT_A_PLANT_JSON: &str = r#"{"identification":{"isPlant":false,"commonName":"Not a plant","latinName":"Not applicable"},"careTips":"Not applicable","benefits":"Not applicable","placement":"Not applicable","translations":{"tagalog":{"commonName":"Hindi halaman","careTips":"Hindi angkop","benefits":"Hindi angkop","placement":"Hindi angkop"}}}"#;

    const BRACES_IN_STRINGS_JSON: &str = r#"{"identification":{"isPlant":true,"commonName":"Snake plant {Sansevieria}","latinName":"Dracaena trifasciata"},"careTips":"Water sparingly; avoid \"wet feet\" }","benefits":"Tolerates low light.","placement":"Indoor, low to bright indirect light","translations":{"tagalog":{"commonName":"Dila-dila","careTips":"Diligan nang bahagya.","benefits":"Kaya ang mahinang liwanag.","placement":"Sa loob ng bahay"}}}"#;

    #[test]
    fn should_parse_bare_json_object() {
        let result = parse_identification(NOT_A_PLANT_JSON).unwrap();

        assert_eq!(result, IdentificationResult::not_a_plant());
    }

    #[test]
    fn should_tolerate_prose_around_the_object() {
        let text = format!("Sure! Here is the result: {NOT_A_PLANT_JSON} Hope that helps!");

        let result = parse_identification(&text).unwrap();

        assert_eq!(result.identification.common_name, "Not a plant");
    }

    #[test]
    fn should_tolerate_markdown_code_fences() {
        let text = format!("```json\n{NOT_A_PLANT_JSON}\n```");

        assert!(parse_identification(&text).is_ok());
    }

    #[test]
    fn should_ignore_braces_inside_string_values() {
        let result = parse_identification(BRACES_IN_STRINGS_JSON).unwrap();

        assert_eq!(
            result.identification.common_name,
            "Snake plant {Sansevieria}"
        );
        assert_eq!(result.care_tips, "Water sparingly; avoid \"wet feet\" }");
    }

    #[test]
    fn should_pick_first_complete_object_when_fragments_follow() {
        let text = format!("{NOT_A_PLANT_JSON}\n\nAlternative: {{\"note\": \"ignore\"}}");

        let result = parse_identification(&text).unwrap();

        assert_eq!(result, IdentificationResult::not_a_plant());
    }

    #[test]
    fn should_skip_leading_fragment_that_does_not_match_contract() {
        let text = format!("Scratch: {{\"draft\": true}} Final: {NOT_A_PLANT_JSON}");

        let result = parse_identification(&text).unwrap();

        assert_eq!(result, IdentificationResult::not_a_plant());
    }

    #[test]
    fn should_report_missing_json_when_no_braces_present() {
        assert_eq!(
            parse_identification("I could not identify this image."),
            Err(IdentificationError::NoJsonFound)
        );
    }

    #[test]
    fn should_report_missing_json_for_unterminated_object() {
        assert_eq!(
            parse_identification("{not valid json"),
            Err(IdentificationError::NoJsonFound)
        );
    }

    #[test]
    fn should_report_invalid_json_for_malformed_object() {
        let result = parse_identification("{not valid json}");

        assert!(matches!(result, Err(IdentificationError::InvalidJson(_))));
    }

    #[test]
    fn should_treat_trailing_commas_as_invalid_json() {
        let text = NOT_A_PLANT_JSON.replacen("}}}", "},}}", 1);

        assert!(matches!(
            parse_identification(&text),
            Err(IdentificationError::InvalidJson(_))
        ));
    }

    #[test]
    fn should_report_invalid_json_when_required_keys_are_missing() {
        let text = r#"{"identification":{"isPlant":true,"commonName":"Fern","latinName":"Polypodiopsida"}}"#;

        assert!(matches!(
            parse_identification(text),
            Err(IdentificationError::InvalidJson(_))
        ));
    }

    #[test]
    fn should_resume_scan_after_unclosed_brace() {
        let text = format!("{{ {NOT_A_PLANT_JSON}");

        assert_eq!(json_object_candidates(&text), vec![&text[2..], &text[..]]);
    }

    #[test]
    fn should_find_object_after_stray_brace_in_prose() {
        let text = format!("Note: format is {{key: value. Result: {NOT_A_PLANT_JSON}");

        let result = parse_identification(&text);

        assert_eq!(result, Ok(IdentificationResult::not_a_plant()));
    }

    #[test]
    fn should_find_object_after_stray_quote_and_brace() {
        let text = format!("Use {{\"like this. {NOT_A_PLANT_JSON} done");

        let result = parse_identification(&text);

        assert_eq!(result, Ok(IdentificationResult::not_a_plant()));
    }

    #[test]
    fn should_not_duplicate_greedy_candidate() {
        assert_eq!(json_object_candidates(NOT_A_PLANT_JSON).len(), 1);
    }

    proptest! {
        #[test]
        fn should_extract_object_from_any_brace_free_prose(
            prefix in "[^{}]{0,40}",
            suffix in "[^{}]{0,40}",
        ) {
            let text = format!("{prefix}{NOT_A_PLANT_JSON}{suffix}");

            let result = parse_identification(&text);

            prop_assert_eq!(result, Ok(IdentificationResult::not_a_plant()));
        }
    }
}
