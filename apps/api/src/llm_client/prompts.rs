// Prompt constants for structured CV extraction.

pub const CV_PARSE_SYSTEM: &str =
    "You are a helpful assistant that extracts structured data from CVs.";

/// CV extraction prompt. Replace `{cv_text}` before sending.
pub const CV_PARSE_PROMPT: &str = "\
Extract the skills, experience, and qualifications from the following CV text.
Return the response as a JSON with keys: skills (list), experience (list of jobs with titles and dates), qualifications (list).

CV TEXT:
{cv_text}
";

pub fn cv_parse_prompt(cv_text: &str) -> String {
    CV_PARSE_PROMPT.replace("{cv_text}", cv_text)
}
