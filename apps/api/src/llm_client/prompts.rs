// Cross-cutting prompt fragments shared by every LLM-backed feature.
// Feature-specific prompts live in a prompts.rs next to the feature.

/// System prompt fragment that enforces plain-prose output.
pub const PROSE_ONLY_SYSTEM: &str = "Respond with plain prose only. \
    Do NOT use markdown, headings, or bullet lists. \
    Do NOT include preamble such as 'Here is the rewritten analysis'. \
    Do NOT include apologies or meta-commentary.";
