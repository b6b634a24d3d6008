//! Headless driver: builds a diagram node with a title entry, replays a typed
//! session against it and logs what the view would draw.
//!
//! Usage: `caption [TEXT]` (defaults to a short sample title). Settings come
//! from `caption.toml` and `CAPTION_*` environment variables.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::{Context, Result};
use caption_config::CaptionConfig;
use caption_core::{Command, FixedAdvanceMeasure, FontSpec, FontdueMeasure, Painter, Point, Size, TextMeasure};
use caption_widget::{
    EditCommand, EntryStyle, EventHandler, LayoutOwner, MouseClickEvent, SidePanel, TitleEntry, ViewSurface,
};
use log::info;

const NODE_PADDING: f32 = 8.0;
const FRAME_DT: f32 = 1.0 / 60.0;

/// Diagram node hosting the title entry.
struct DiagramNode {
    origin: Point,
    size: Cell<Size>,
}

impl DiagramNode {
    fn title_origin(&self) -> Point {
        Point::new(self.origin.x + NODE_PADDING, self.origin.y + NODE_PADDING)
    }
}

impl LayoutOwner for DiagramNode {
    fn recalculate_size(&self, child: Size) {
        let size = Size::new(child.width + 2.0 * NODE_PADDING, child.height + 2.0 * NODE_PADDING);
        if size != self.size.get() {
            info!("node resized to {:.1}x{:.1}", size.width, size.height);
        }
        self.size.set(size);
    }
}

/// Stands in for the editor's side panel, which re-reads the node on refresh.
struct NodePanel {
    node: Rc<DiagramNode>,
    refreshes: Cell<usize>,
}

impl SidePanel for NodePanel {
    fn update_node_panel(&self) {
        self.refreshes.set(self.refreshes.get() + 1);
        let size = self.node.size.get();
        info!("panel: node is {:.1}x{:.1}", size.width, size.height);
    }
}

struct HeadlessView {
    measure: Box<dyn TextMeasure>,
    repaints: Cell<usize>,
}

impl TextMeasure for HeadlessView {
    fn measure_width(&self, text: &str, font: &FontSpec) -> f32 {
        self.measure.measure_width(text, font)
    }
    fn measure_height(&self, text: &str, font: &FontSpec) -> f32 {
        self.measure.measure_height(text, font)
    }
    fn measure_descent(&self, text: &str, font: &FontSpec) -> f32 {
        self.measure.measure_descent(text, font)
    }
}

impl ViewSurface for HeadlessView {
    fn request_repaint(&self) {
        self.repaints.set(self.repaints.get() + 1);
    }
}

fn load_measure(config: &CaptionConfig) -> Result<Box<dyn TextMeasure>> {
    match &config.font.path {
        Some(path) => {
            let measure = FontdueMeasure::from_path(path)
                .with_context(|| format!("loading font {}", path.display()))?;
            info!("measuring with {}", path.display());
            Ok(Box::new(measure))
        }
        None => {
            info!("no font configured, using fixed-advance metrics");
            Ok(Box::new(FixedAdvanceMeasure::default()))
        }
    }
}

fn script(text: &str) -> Vec<EditCommand> {
    let mut commands: Vec<EditCommand> = text
        .chars()
        .map(|c| if c == ' ' { EditCommand::InsertSpace } else { EditCommand::InsertChar(c) })
        .collect();
    // Fix a typo in the middle of the title, then return to the end.
    commands.extend([
        EditCommand::MoveLeft,
        EditCommand::MoveLeft,
        EditCommand::InsertChar('x'),
        EditCommand::DeleteBefore,
        EditCommand::MoveRight,
        EditCommand::MoveRight,
    ]);
    commands
}

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let config = CaptionConfig::load();
    let text = std::env::args().nth(1).unwrap_or_else(|| "Parse input, v2".to_string());

    let node = Rc::new(DiagramNode {
        origin: Point::new(40.0, 40.0),
        size: Cell::new(Size::default()),
    });
    let panel = Rc::new(NodePanel {
        node: node.clone(),
        refreshes: Cell::new(0),
    });
    let view = Rc::new(HeadlessView {
        measure: load_measure(&config)?,
        repaints: Cell::new(0),
    });

    let mut entry = TitleEntry::new(Rc::downgrade(&(node.clone() as Rc<dyn LayoutOwner>)), panel.clone(), view.clone(), EntryStyle::from(&config));
    entry.set_position(node.title_origin());
    node.recalculate_size(entry.size());

    let click = entry.bounds().origin();
    entry.set_focused(true);
    entry.handle_mouse_click(MouseClickEvent::left(click.x, click.y));

    let mut rejected = 0;
    for command in script(&text) {
        if !entry.handle_command(command).is_handled() {
            rejected += 1;
        }
        entry.tick(FRAME_DT);
    }

    let mut painter = Painter::begin_frame();
    entry.paint(&mut painter);
    for command in &painter.finish().commands {
        match command {
            Command::DrawText { run, z } => info!(
                "draw text {:?} at ({:.1}, {:.1}) size {} color {:?} z={z}",
                run.text,
                run.pos[0],
                run.pos[1],
                run.size,
                run.color.to_srgba_u8()
            ),
            Command::DrawRect { rect, color, z } => info!(
                "draw rect ({:.1}, {:.1}) {:.1}x{:.1} color {:?} z={z}",
                rect.x,
                rect.y,
                rect.w,
                rect.h,
                color.to_srgba_u8()
            ),
        }
    }

    let size = node.size.get();
    println!("title:    {:?}", entry.text());
    println!("caret:    {}", entry.caret_index());
    println!("node:     {:.1}x{:.1}", size.width, size.height);
    println!("rejected: {rejected}");
    println!("repaints: {}", view.repaints.get());
    println!("panel:    {} refreshes", panel.refreshes.get());
    Ok(())
}
