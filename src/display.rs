use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use tictactoe_ai::board::Board;

/// Prints the board, colouring the marks unless `plain` is set
pub fn display(board: &Board, plain: bool) -> Result<()> {
    let mut stdout = stdout();

    if plain {
        write!(stdout, "{}", board)?;
        stdout.flush()?;
        return Ok(());
    }

    for line in board.render() {
        for glyph in line.chars() {
            let styled = match glyph {
                'X' => style(glyph).with(Color::Red).attribute(Attribute::Bold),
                'O' => style(glyph).with(Color::Yellow).attribute(Attribute::Bold),
                '|' | '-' | '+' => style(glyph).with(Color::DarkGrey),
                _ => style(glyph),
            };
            stdout.queue(PrintStyledContent(styled))?;
        }
        stdout.queue(PrintStyledContent(style('\n')))?;
    }
    stdout.flush()?;
    Ok(())
}
