//! Line-level differencing of two text blocks.

/// Delta classifies a line of a line diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delta {
    /// The line only appears in the left text.
    LeftOnly,
    /// The line only appears in the right text.
    RightOnly,
    /// The line appears in both texts.
    Common,
}

/// LineDiff is one classified line of a line diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiff<'a> {
    pub delta: Delta,
    pub text: &'a str,
}

impl<'a> LineDiff<'a> {
    fn new(delta: Delta, text: &'a str) -> Self {
        LineDiff { delta, text }
    }
}

/// Aligns the lines of `a` and `b` along their longest common subsequence.
///
/// Lines are split on `\n` only, so carriage returns stay part of the line.
/// Empty text has no lines and a trailing newline does not produce an empty
/// last line. Where a left-only and a right-only line compete for the same
/// position, the left-only line is emitted first.
pub fn diff_lines<'a>(a: &'a str, b: &'a str) -> Vec<LineDiff<'a>> {
    let left = split_lines(a);
    let right = split_lines(b);
    let (n, m) = (left.len(), right.len());

    // lcs[i][j] is the LCS length of left[i..] and right[j..].
    let mut lcs = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if left[i] == right[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut out = Vec::with_capacity(n.max(m));
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if left[i] == right[j] {
            out.push(LineDiff::new(Delta::Common, left[i]));
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            out.push(LineDiff::new(Delta::LeftOnly, left[i]));
            i += 1;
        } else {
            out.push(LineDiff::new(Delta::RightOnly, right[j]));
            j += 1;
        }
    }
    out.extend(left[i..].iter().map(|&l| LineDiff::new(Delta::LeftOnly, l)));
    out.extend(right[j..].iter().map(|&r| LineDiff::new(Delta::RightOnly, r)));
    out
}

fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if text.is_empty() || text.ends_with('\n') {
        lines.pop();
    }
    lines
}
