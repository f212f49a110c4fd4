//! Splits the raw command string sent by the extension into an argument list.

/// Parse a raw command string into its argument vector.
///
/// The grammar is deliberately tiny: optional surrounding double quotes, then
/// `;`-delimited tokens. Two quirks are load-bearing and must not be "fixed":
///
/// - When the first character is `"`, the first character and the last
///   character are removed as two independent operations. The trailing
///   removal happens even if that character is not a quote.
/// - Empty segments are preserved: `a;;b` yields `["a", "", "b"]` and a
///   trailing `;` yields a trailing empty argument. No whitespace trimming.
///
/// Splitting always yields at least one segment, so the result is never
/// empty (the orchestration rejects the empty command before parsing).
pub fn parse(raw: &str) -> Vec<String> {
    let stripped = if let Some(rest) = raw.strip_prefix('"') {
        match rest.char_indices().next_back() {
            Some((idx, _)) => &rest[..idx],
            None => rest,
        }
    } else {
        raw
    };
    stripped.split(';').map(str::to_owned).collect()
}
