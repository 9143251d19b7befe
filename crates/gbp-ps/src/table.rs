use std::io::Write;

use gbp_ps_core::{PhaseProgress, ProcessRow, TableBody};

const TITLE: &str = "Ebuild Processes";
const BAR_WIDTH: usize = 12;
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";
const RESET: &str = "\x1B[0m";

/// Which optional columns to show and how to draw them.
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    pub show_node: bool,
    pub show_start: bool,
    pub show_progress: bool,
    /// Colour the progress bars with 24-bit ANSI escapes
    pub color: bool,
    /// Clear the screen before every render
    pub clear_screen: bool,
    /// Print nothing at all for an empty list
    pub hide_when_empty: bool,
    /// Line printed below the table
    pub footer: Option<String>,
}

#[derive(Debug, Clone, Copy)]
enum Column {
    Machine,
    Id,
    Package,
    Start,
    Elapsed,
    Phase,
    Progress,
    Node,
}

impl Column {
    fn header(&self) -> &'static str {
        match self {
            Column::Machine => "Machine",
            Column::Id => "ID",
            Column::Package => "Package",
            Column::Start => "Start",
            Column::Elapsed => "Elapsed",
            Column::Phase => "Phase",
            Column::Progress => "Progress",
            Column::Node => "Node",
        }
    }

    fn text<'a>(&self, row: &'a ProcessRow) -> &'a str {
        match self {
            Column::Machine => &row.machine,
            Column::Id => &row.id,
            Column::Package => &row.package,
            Column::Start => &row.start,
            Column::Elapsed => &row.elapsed,
            Column::Phase => &row.phase,
            Column::Node => &row.build_host,
            Column::Progress => "",
        }
    }

    fn max_width(&self) -> usize {
        match self {
            Column::Package => 60,
            Column::Progress => BAR_WIDTH,
            _ => 30,
        }
    }
}

pub struct TableFormatter {
    columns: Vec<(Column, usize)>,
    color: bool,
}

impl TableFormatter {
    pub fn new(rows: &[ProcessRow], options: &TableOptions) -> Self {
        let mut columns = vec![Column::Machine, Column::Id, Column::Package];
        if options.show_start {
            columns.push(Column::Start);
        }
        columns.extend([Column::Elapsed, Column::Phase]);
        if options.show_progress {
            columns.push(Column::Progress);
        }
        if options.show_node {
            columns.push(Column::Node);
        }

        let columns = columns
            .into_iter()
            .map(|column| {
                let content = match column {
                    Column::Progress => BAR_WIDTH,
                    _ => rows
                        .iter()
                        .map(|row| column.text(row).chars().count())
                        .max()
                        .unwrap_or(0),
                };
                let width = content
                    .max(column.header().len())
                    .min(column.max_width().max(column.header().len()));
                (column, width)
            })
            .collect();

        Self {
            columns,
            color: options.color,
        }
    }

    /// Render the whole table, with a trailing newline.
    pub fn render(&self, rows: &[ProcessRow], frame: usize) -> String {
        let mut out = String::new();

        let inner_width: usize = self.columns.iter().map(|(_, w)| w + 3).sum::<usize>() - 1;
        out.push_str(&format!("{:^width$}\n", TITLE, width = inner_width + 2));
        out.push_str(&self.border('╭', '┬', '╮'));
        out.push_str(&self.header_row());
        out.push_str(&self.border('├', '┼', '┤'));
        for row in rows {
            out.push_str(&self.row(row, frame));
        }
        out.push_str(&self.border('╰', '┴', '╯'));

        out
    }

    fn border(&self, left: char, middle: char, right: char) -> String {
        let segments: Vec<String> = self
            .columns
            .iter()
            .map(|(_, width)| "─".repeat(width + 2))
            .collect();
        format!("{}{}{}\n", left, segments.join(&middle.to_string()), right)
    }

    fn header_row(&self) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .map(|(column, width)| truncate(column.header(), *width))
            .collect();
        format!("│ {} │\n", cells.join(" │ "))
    }

    fn row(&self, row: &ProcessRow, frame: usize) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .map(|(column, width)| match column {
                Column::Progress => progress_bar(&row.progress, frame, self.color),
                _ => truncate(column.text(row), *width),
            })
            .collect();
        format!("│ {} │\n", cells.join(" │ "))
    }
}

/// Draw a progress bar exactly [`BAR_WIDTH`] cells wide.
///
/// Indeterminate bars are striped; `frame` shifts the stripes so they move
/// between renders.
pub fn progress_bar(progress: &PhaseProgress, frame: usize, color: bool) -> String {
    let cells: String = if progress.indeterminate {
        (0..BAR_WIDTH)
            .map(|i| if (i + frame) % 4 < 2 { '█' } else { '░' })
            .collect()
    } else {
        let filled = (progress.percent as usize * BAR_WIDTH + 50) / 100;
        let filled = filled.min(BAR_WIDTH);
        format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
    };

    match progress.color {
        Some(c) if color => format!("\x1B[38;2;{};{};{}m{}{}", c.r, c.g, c.b, cells, RESET),
        _ => cells,
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}

/// [`TableBody`] that draws a box table to a terminal (or any writer).
pub struct TerminalTableBody<W: Write> {
    out: W,
    options: TableOptions,
    frame: usize,
}

impl<W: Write> TerminalTableBody<W> {
    pub fn new(out: W, options: TableOptions) -> Self {
        Self {
            out,
            options,
            frame: 0,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TableBody for TerminalTableBody<W> {
    fn replace_rows(&mut self, rows: Vec<ProcessRow>) -> std::io::Result<()> {
        if rows.is_empty() && self.options.hide_when_empty {
            return Ok(());
        }

        let mut text = String::new();
        if self.options.clear_screen {
            text.push_str(CLEAR_SCREEN);
        }
        let formatter = TableFormatter::new(&rows, &self.options);
        text.push_str(&formatter.render(&rows, self.frame));
        if let Some(footer) = &self.options.footer {
            text.push('\n');
            text.push_str(footer);
            text.push('\n');
        }

        self.frame = self.frame.wrapping_add(1);
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }
}

/// [`TableBody`] that prints every render as a pretty JSON array.
pub struct JsonTableBody<W: Write> {
    out: W,
}

impl<W: Write> JsonTableBody<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TableBody for JsonTableBody<W> {
    fn replace_rows(&mut self, rows: Vec<ProcessRow>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(&rows).map_err(std::io::Error::other)?;
        writeln!(self.out, "{}", json)?;
        self.out.flush()
    }
}
