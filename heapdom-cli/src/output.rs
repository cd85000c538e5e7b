use comfy_table::{presets, CellAlignment, Table};
use serde::Serialize;

use crate::app::GlobalOptions;

/// Print `data` as JSON (if `--json`) or call `display_fn` for human-readable output.
pub fn print_output<T: Serialize>(
    data: &T,
    opts: &GlobalOptions,
    display_fn: impl FnOnce(&T),
) -> anyhow::Result<()> {
    if opts.json {
        let json = serde_json::to_string_pretty(data)?;
        println!("{json}");
    } else {
        display_fn(data);
    }
    Ok(())
}

/// Borderless listing of heap objects: the object name, then right-aligned
/// figures such as sizes, depths and counts.
pub struct ObjectTable {
    table: Table,
    margin: usize,
}

impl ObjectTable {
    /// Creates a table whose figure columns follow the leading `Object` column.
    pub fn new(figures: &[&str]) -> Self {
        let mut table = Table::new();
        table.load_preset(presets::NOTHING);
        table.set_header(std::iter::once("Object").chain(figures.iter().copied()));

        let last = figures.len();
        for (i, column) in table.column_iter_mut().enumerate() {
            if i > 0 {
                column.set_cell_alignment(CellAlignment::Right);
            }
            column.set_padding((u16::from(i > 0), u16::from(i < last)));
        }

        ObjectTable { table, margin: 0 }
    }

    /// Shifts every line right by `margin` spaces.
    pub fn with_margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }

    /// Adds one object with its figures, in column order.
    pub fn push(&mut self, object: &str, figures: &[u64]) {
        let cells = std::iter::once(object.to_string()).chain(figures.iter().map(u64::to_string));
        self.table.add_row(cells);
    }

    /// Renders the table, header first, without trailing whitespace.
    pub fn render(&self) -> String {
        let margin = " ".repeat(self.margin);
        self.table
            .to_string()
            .lines()
            .map(|line| format!("{margin}{}", line.trim_end()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn print(&self) {
        println!("{}", self.render());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figures_right_aligned() {
        let mut table = ObjectTable::new(&["Size"]);
        table.push("cache", &[128]);
        table.push("entry", &[16]);

        let lines: Vec<String> = table.render().lines().map(str::to_string).collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Object"));
        assert!(lines[1].starts_with("cache") && lines[1].ends_with("128"));
        assert!(lines[2].ends_with(" 16"));
        assert_eq!(lines[1].len(), lines[2].len());
    }

    #[test]
    fn test_margin_applies_to_every_line() {
        let mut table = ObjectTable::new(&["Size", "Dominated"]).with_margin(2);
        table.push("session", &[64, 3]);

        let rendered = table.render();
        assert!(rendered.lines().all(|line| line.starts_with("  ")));
        assert!(!rendered.lines().any(|line| line.ends_with(' ')));
    }
}
