//! Line-oriented removal of boilerplate from generated digests.
//!
//! The daily digest generator appends two pieces of repeated content that
//! must not survive the build: a promotional reference line linking to the
//! web edition and discussion group, and an audio-edition section (heading
//! plus the playback table below it). Both are identified by fixed literal
//! strings; no Markdown parsing is involved.

/// Fixed literal patterns identifying the content to remove.
///
/// The literals are the source-locale strings emitted by the digest
/// generator. `Default` carries them so callers never spell them out.
#[derive(Debug, Clone)]
pub struct StripRules {
    /// Both substrings must appear in a line for it to be dropped.
    pub promo_markers: [&'static str; 2],
    /// Whitespace-trimmed heading that opens the audio-edition section.
    pub audio_heading: &'static str,
}

impl Default for StripRules {
    fn default() -> Self {
        Self {
            promo_markers: ["访问网页版", "进群交流"],
            audio_heading: "## **AI资讯日报语音版**",
        }
    }
}

impl StripRules {
    fn is_promo_line(&self, line: &str) -> bool {
        self.promo_markers.iter().all(|marker| line.contains(marker))
    }

    fn is_audio_heading(&self, line: &str) -> bool {
        line.trim() == self.audio_heading
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn is_table_or_image(line: &str) -> bool {
    let content = line.trim_start();
    content.starts_with('|') || content.starts_with("![")
}

/// Remove promotional reference lines and the audio-edition section.
///
/// Single forward pass over the lines. Retained lines are joined with
/// `\n` and the trailing newline is kept iff the input ended with one;
/// nothing else about the text is normalized. Applying the result a
/// second time is a no-op.
pub fn strip_unwanted_sections(text: &str, rules: &StripRules) -> String {
    let ends_with_newline = text.ends_with('\n');
    let mut lines: Vec<&str> = text.split('\n').collect();
    if ends_with_newline {
        // split leaves an empty piece after the final newline
        lines.pop();
    }

    let total = lines.len();
    let mut kept: Vec<&str> = Vec::with_capacity(total);
    let mut i = 0;

    while i < total {
        let line = lines[i];

        if rules.is_promo_line(line) {
            i += 1;
            continue;
        }

        if rules.is_audio_heading(line) {
            i += 1;
            // blank gap between the heading and the table
            while i < total && is_blank(lines[i]) {
                i += 1;
            }
            // playback table rows, including rows rendered as images
            while i < total && is_table_or_image(lines[i]) {
                i += 1;
            }
            // blank gap the table leaves behind
            while i < total && is_blank(lines[i]) {
                i += 1;
            }
            continue;
        }

        kept.push(line);
        i += 1;
    }

    let mut out = kept.join("\n");
    if ends_with_newline {
        out.push('\n');
    }
    out
}
