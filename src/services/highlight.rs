//! Split text into matched and unmatched runs for highlighting.

/// A run of consecutive characters that are either all highlighted or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'t> {
    pub text: &'t str,
    pub matched: bool,
}

/// Split `text` into runs according to `positions`.
///
/// `positions` are sorted character offsets; offsets past the end of the text
/// are ignored.
pub fn segments<'t>(text: &'t str, positions: &[usize]) -> Vec<Segment<'t>> {
    let mut out: Vec<Segment<'t>> = Vec::new();
    let mut run_start = 0;
    let mut run_matched = None;

    for (index, (byte, _)) in text.char_indices().enumerate() {
        let matched = positions.binary_search(&index).is_ok();
        match run_matched {
            Some(current) if current == matched => {}
            Some(current) => {
                out.push(Segment {
                    text: &text[run_start..byte],
                    matched: current,
                });
                run_start = byte;
                run_matched = Some(matched);
            }
            None => run_matched = Some(matched),
        }
    }

    if let Some(matched) = run_matched {
        out.push(Segment {
            text: &text[run_start..],
            matched,
        });
    }
    out
}
