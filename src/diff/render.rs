//! Colored rendering of entity diffs.

use super::lines::{diff_lines, Delta};
use super::reconciler::{Diff, Diffs};
use super::serializer::serialize;
use super::DiffError;
use crate::entity::Entity;
use std::io::Write;

const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Yellow,
    Green,
    Red,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Color::Yellow => "\x1b[33m",
            Color::Green => "\x1b[32m",
            Color::Red => "\x1b[31m",
        }
    }
}

/// RenderOptions controls how diffs are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit ANSI color codes for headers and changed lines.
    pub color: bool,
    /// Prefix written before every diff line.
    pub indent: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            color: true,
            indent: "  ".to_string(),
        }
    }
}

impl RenderOptions {
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }
}

/// RenderReport collects the outcome of rendering a sequence of diffs.
#[derive(Debug, Default)]
pub struct RenderReport {
    /// Number of diffs written to the output.
    pub rendered: usize,
    /// Diffs that could not be rendered; the rest were still written.
    pub failures: Vec<DiffError>,
}

impl RenderReport {
    /// Returns true if every diff was rendered.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Appends the results of another report.
    pub fn merge(&mut self, other: RenderReport) {
        self.rendered += other.rendered;
        self.failures.extend(other.failures);
    }
}

/// Renderer writes diffs to an output stream.
///
/// The renderer only writes; creating, flushing and closing the stream is up
/// to the caller.
#[derive(Debug)]
pub struct Renderer<W> {
    out: W,
    options: RenderOptions,
}

impl<W: Write> Renderer<W> {
    /// Creates a renderer with default options.
    pub fn new(out: W) -> Self {
        Self::with_options(out, RenderOptions::default())
    }

    pub fn with_options(out: W, options: RenderOptions) -> Self {
        Renderer { out, options }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes a single diff under the given label.
    ///
    /// Both sides are serialized before anything is written, so a
    /// serialization failure leaves the output untouched.
    pub fn render<T: Entity>(&mut self, diff: &Diff<'_, T>, label: &str) -> Result<(), DiffError> {
        let before = serialize(diff.before())?;
        let after = serialize(diff.after())?;

        let status = match diff {
            Diff::Changed { .. } => "has changed",
            Diff::Removed(_) => "has been removed",
            Diff::Added(_) => "has been added",
        };
        let header = format!("{} {} {}:", label, diff.name(), status);
        self.paint(Color::Yellow, &header)?;
        writeln!(self.out)?;

        for line in diff_lines(&before, &after) {
            // Unchanged blank lines carry no indent, to avoid trailing whitespace.
            if !(line.delta == Delta::Common && line.text.is_empty()) {
                self.out.write_all(self.options.indent.as_bytes())?;
            }
            match line.delta {
                Delta::LeftOnly => self.paint(Color::Red, line.text)?,
                Delta::RightOnly => self.paint(Color::Green, line.text)?,
                Delta::Common => self.out.write_all(line.text.as_bytes())?,
            }
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Writes every diff in order under the given label.
    ///
    /// A diff that cannot be serialized is skipped and recorded in the report;
    /// the remaining diffs are still written. Write errors abort.
    pub fn render_all<T: Entity>(
        &mut self,
        diffs: &Diffs<'_, T>,
        label: &str,
    ) -> Result<RenderReport, DiffError> {
        let mut report = RenderReport::default();
        for diff in diffs.iter() {
            match self.render(diff, label) {
                Ok(()) => report.rendered += 1,
                Err(e) if e.is_isolated() => {
                    let cause = std::error::Error::source(&e)
                        .map(|c| c.to_string())
                        .unwrap_or_default();
                    tracing::warn!(kind = T::KIND, name = diff.name(), %cause, "skipping diff");
                    report.failures.push(e);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(report)
    }

    fn paint(&mut self, color: Color, text: &str) -> Result<(), DiffError> {
        if self.options.color {
            write!(self.out, "{}{}{}", color.code(), text, RESET)?;
        } else {
            self.out.write_all(text.as_bytes())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResourceConfig;
    use crate::diff::reconcile;
    use crate::entity::fixtures::item;
    use crate::entity::Index;
    use crate::value::Value;
    use pretty_assertions::assert_eq;
    use serde::{Serialize, Serializer};

    fn plain() -> Renderer<Vec<u8>> {
        Renderer::with_options(Vec::new(), RenderOptions::default().with_color(false))
    }

    fn output(renderer: Renderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_render_changed() {
        let (a1, a2) = (item("a", 1), item("a", 2));
        let mut renderer = plain();
        renderer
            .render(&Diff::Changed { before: &a1, after: &a2 }, "item")
            .unwrap();
        assert_eq!(
            output(renderer),
            "item a has changed:\n  name: a\n  value: 1\n  value: 2\n"
        );
    }

    #[test]
    fn test_render_changed_with_color() {
        let (a1, a2) = (item("a", 1), item("a", 2));
        let mut renderer = Renderer::new(Vec::new());
        renderer
            .render(&Diff::Changed { before: &a1, after: &a2 }, "item")
            .unwrap();
        assert_eq!(
            output(renderer),
            "\x1b[33mitem a has changed:\x1b[0m\n\
             \x20 name: a\n\
             \x20 \x1b[31mvalue: 1\x1b[0m\n\
             \x20 \x1b[32mvalue: 2\x1b[0m\n"
        );
    }

    #[test]
    fn test_render_removed() {
        let b = item("b", 2);
        let mut renderer = Renderer::new(Vec::new());
        renderer.render(&Diff::Removed(&b), "job").unwrap();
        assert_eq!(
            output(renderer),
            "\x1b[33mjob b has been removed:\x1b[0m\n\
             \x20 \x1b[31mname: b\x1b[0m\n\
             \x20 \x1b[31mvalue: 2\x1b[0m\n"
        );
    }

    #[test]
    fn test_render_added_with_custom_indent() {
        let c = item("c", 3);
        let mut renderer = Renderer::with_options(
            Vec::new(),
            RenderOptions::default().with_color(false).with_indent("> "),
        );
        renderer.render(&Diff::Added(&c), "resource").unwrap();
        assert_eq!(
            output(renderer),
            "resource c has been added:\n> name: c\n> value: 3\n"
        );
    }

    #[test]
    fn test_render_removed_blank_line_in_block_string() {
        let before = ResourceConfig {
            name: "r".to_string(),
            type_: "git".to_string(),
            source: Value::from("echo a\n\necho b"),
            ..Default::default()
        };
        let after = ResourceConfig {
            source: Value::from("echo a\necho b"),
            ..before.clone()
        };

        let mut renderer = Renderer::new(Vec::new());
        renderer
            .render(&Diff::Changed { before: &before, after: &after }, "resource")
            .unwrap();
        assert_eq!(
            output(renderer),
            "\x1b[33mresource r has changed:\x1b[0m\n\
             \x20 name: r\n\
             \x20 type: git\n\
             \x20 source: |-\n\
             \x20   echo a\n\
             \x20 \x1b[31m\x1b[0m\n\
             \x20   echo b\n"
        );
    }

    #[test]
    fn test_render_added_blank_line_is_indented() {
        let after = ResourceConfig {
            name: "r".to_string(),
            type_: "git".to_string(),
            source: Value::from("a\n\nb"),
            ..Default::default()
        };

        let mut renderer = plain();
        renderer.render(&Diff::Added(&after), "resource").unwrap();
        assert_eq!(
            output(renderer),
            "resource r has been added:\n  name: r\n  type: git\n  source: |-\n    a\n  \n    b\n"
        );
    }

    #[test]
    fn test_render_unchanged_blank_line_has_no_indent() {
        let before = ResourceConfig {
            name: "r".to_string(),
            type_: "git".to_string(),
            source: Value::from("a\n\nb"),
            ..Default::default()
        };
        let after = ResourceConfig {
            check_every: Some("1m".to_string()),
            ..before.clone()
        };

        let mut renderer = plain();
        renderer
            .render(&Diff::Changed { before: &before, after: &after }, "resource")
            .unwrap();
        assert_eq!(
            output(renderer),
            "resource r has changed:\n  name: r\n  type: git\n  source: |-\n    a\n\n    b\n  check_every: 1m\n"
        );
    }

    #[test]
    fn test_render_all_in_order() {
        let old = Index::new(vec![item("a", 1), item("b", 2)]).unwrap();
        let new = Index::new(vec![item("a", 1), item("c", 3)]).unwrap();
        let diffs = reconcile(&old, &new);

        let mut renderer = plain();
        let report = renderer.render_all(&diffs, "item").unwrap();
        assert_eq!(report.rendered, 2);
        assert!(report.is_complete());
        assert_eq!(
            output(renderer),
            "item b has been removed:\n  name: b\n  value: 2\n\
             item c has been added:\n  name: c\n  value: 3\n"
        );
    }

    #[derive(Debug, PartialEq)]
    struct Flaky {
        name: &'static str,
        broken: bool,
    }

    impl Serialize for Flaky {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            if self.broken {
                return Err(serde::ser::Error::custom("cannot encode"));
            }
            s.serialize_str(self.name)
        }
    }

    impl Entity for Flaky {
        const KIND: &'static str = "flaky";

        fn name(&self) -> &str {
            self.name
        }
    }

    #[test]
    fn test_render_all_isolates_serialization_failures() {
        let old = Index::new(vec![
            Flaky { name: "bad", broken: true },
            Flaky { name: "good", broken: false },
        ])
        .unwrap();
        let new = Index::default();
        let diffs = reconcile(&old, &new);

        let mut renderer = plain();
        let report = renderer.render_all(&diffs, "flaky").unwrap();
        assert_eq!(report.rendered, 1);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].to_string().contains("flaky bad"));
        assert_eq!(output(renderer), "flaky good has been removed:\n  good\n");
    }

    struct ClosedStream;

    impl Write for ClosedStream {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_render_all_aborts_on_write_error() {
        let old = Index::new(vec![item("a", 1)]).unwrap();
        let new = Index::new(vec![item("b", 1)]).unwrap();
        let diffs = reconcile(&old, &new);

        let err = Renderer::new(ClosedStream).render_all(&diffs, "item").unwrap_err();
        assert!(matches!(err, DiffError::Io(_)));
    }
}
