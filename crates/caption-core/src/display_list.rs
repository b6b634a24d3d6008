use crate::scene::*;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    DrawRect { rect: Rect, color: ColorLinPremul, z: i32 },
    DrawText { run: TextRun, z: i32 },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    pub commands: Vec<Command>,
}

impl DisplayList {
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text runs in draw order.
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.commands.iter().filter_map(|c| match c {
            Command::DrawText { run, .. } => Some(run),
            _ => None,
        })
    }

    /// Filled rectangles in draw order.
    pub fn rects(&self) -> impl Iterator<Item = (&Rect, &ColorLinPremul)> {
        self.commands.iter().filter_map(|c| match c {
            Command::DrawRect { rect, color, .. } => Some((rect, color)),
            _ => None,
        })
    }
}
