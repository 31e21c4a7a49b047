//! Prompt construction for the analysis and persona calls.

use crate::error::CoreError;
use crate::profile::StyleProfile;

/// Instruction block sent once per session to extract a style profile from
/// the provided samples. The model is told to answer with strict JSON
/// matching the profile schema and nothing else.
pub const ANALYSIS_INSTRUCTIONS: &str = r#"
You are analyzing past messages to build a texting persona.

Extract the sender's texting style with EVIDENCE from the text. Be concrete and do not invent.
Return STRICT JSON with these keys (nothing else):

{
  "name": "<string or null>",
  "tone": "<3-8 words: e.g., dry, playful, flirty, blunt>",
  "favorite_phrases": ["<short phrases or slang they reuse>"],
  "emoji_usage": {
    "frequency": "<none | rare | sometimes | frequent>",
    "types": ["😂","🥲","❤️", "..."],
    "position": "<inline | end-of-message | both>",
    "notes": "<e.g., uses stickers/GIFs; avoids emojis entirely>"
  },
  "punctuation_style": {
    "periods": "<always | sometimes | never>",
    "exclamations": "<none | light | heavy>",
    "question_marks": "<none | light | heavy>",
    "ellipses": "<never | sometimes | heavy>",
    "commas": "<sparse | normal | heavy>",
    "quirks": ["double '??', '!!!', '...'", "no caps", "overuses commas"]
  },
  "capitalization": "<normal | all lower | Title Case | RANDOM Caps | switches>",
  "abbreviations": ["u","ur","idk","lmk","btw","tbh", "..."],
  "response_length": "<1-3 words | short | medium | long>",
  "formality": "<very casual | casual | neutral | formal>",
  "cursing": "<never | mild | frequent>",
  "pet_names": ["<e.g., babe, dude, bro>"],
  "quirks": ["<nonstandard spellings, drawn-out letters (soooo), keyboard smashes, etc.>"],
  "boundaries": "<hard lines they state (topics to avoid, time boundaries), or null>",
  "summary": "<2-3 sentences summarizing their style>",
  "opening_line": "<a natural first message they'd send, in their style>",
  "evidence_examples": ["<1-3 short quotes from the text supporting the above>"]
}

Rules:
- Use only what's in the provided text/images - no guessing.
- If something is not present, use null or an empty list.
- Keep strings short. No explanations outside the JSON.
"#;

/// Build the persona system prompt, embedding the profile as compact JSON.
///
/// Deterministic for a given profile; reused verbatim on every turn of the
/// session.
pub fn build_persona_prompt(profile: &StyleProfile) -> Result<String, CoreError> {
    let profile_json = serde_json::to_string(profile)?;
    Ok(format!(
        "You are the user's ex in a texting simulation.\n\
         Style profile (JSON): {profile_json}\n\
         Imitate this style exactly:\n\
         - Match slang/abbreviations and emoji frequency (including NONE if they avoid emojis).\n\
         - Match punctuation habits (periods, !!!, ??, ellipses) and capitalization (e.g., all lowercase).\n\
         - Match response length: keep it as short as they usually write.\n\
         - Keep tone and quirks (drawn-out letters, misspellings) consistent.\n\
         Brevity: 1-2 short sentences max unless the user clearly asks for more.\n\
         Do not reveal you are an AI. Avoid unsafe/explicit content.\n"
    ))
}
