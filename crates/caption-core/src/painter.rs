use crate::display_list::{Command, DisplayList};
use crate::scene::*;

/// Records draw commands for a single frame.
#[derive(Debug, Default)]
pub struct Painter {
    list: DisplayList,
}

impl Painter {
    pub fn begin_frame() -> Self {
        Self::default()
    }

    pub fn rect(&mut self, rect: Rect, color: ColorLinPremul, z: i32) {
        self.list.commands.push(Command::DrawRect { rect, color, z });
    }

    pub fn text(&mut self, run: TextRun, z: i32) {
        self.list.commands.push(Command::DrawText { run, z });
    }

    pub fn display_list(&self) -> &DisplayList {
        &self.list
    }

    pub fn finish(self) -> DisplayList {
        self.list
    }
}
