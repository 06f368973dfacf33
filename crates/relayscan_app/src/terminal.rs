use std::io::{self, Stdout, Write};

use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::queue;
use crossterm::terminal::{self, Clear, ClearType};
use relayscan_engine::RenderSink;

/// Redraws the status block in place.
///
/// Each render moves the cursor back over the rows the previous block
/// occupied, including rows added by wrapping, clears them and writes the new
/// lines.
pub struct LiveTerminal<W> {
    out: W,
    // `None` asks the terminal on every render so resizes are picked up.
    columns: Option<u16>,
    drawn: u16,
}

impl LiveTerminal<Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: io::stdout(),
            columns: None,
            drawn: 0,
        }
    }
}

impl<W: Write> LiveTerminal<W> {
    /// A terminal of fixed width, for writers that are not a tty.
    pub fn with_columns(out: W, columns: u16) -> Self {
        Self {
            out,
            columns: Some(columns),
            drawn: 0,
        }
    }

    fn columns(&self) -> Option<u16> {
        self.columns
            .or_else(|| terminal::size().ok().map(|(columns, _rows)| columns))
            .filter(|columns| *columns > 0)
    }
}

/// Screen rows a line takes once wrapped at `columns`.
fn rows_for(line: &str, columns: Option<u16>) -> usize {
    let len = line.chars().count();
    match columns {
        Some(columns) => len.div_ceil(usize::from(columns)).max(1),
        None => 1,
    }
}

impl<W: Write + Send + 'static> RenderSink for LiveTerminal<W> {
    fn render(&mut self, lines: &[String]) -> io::Result<()> {
        if self.drawn > 0 {
            queue!(self.out, MoveUp(self.drawn), MoveToColumn(0))?;
        }
        queue!(self.out, Clear(ClearType::FromCursorDown))?;
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()?;
        let columns = self.columns();
        let rows: usize = lines.iter().map(|line| rows_for(line, columns)).sum();
        self.drawn = u16::try_from(rows).unwrap_or(u16::MAX);
        Ok(())
    }
}
