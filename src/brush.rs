use log::warn;

use crate::life::Life;

/// Left-button input gathered for one frame, already mapped to cells.
pub struct Stroke {
    pub pressed: bool,
    pub press_cell: Option<(usize, usize)>, // Cell under a press inside the grid.
    pub held: bool,
    pub from: (isize, isize), // Cursor cell at the start of the frame.
    pub to: (isize, isize),
}

/// Paints the state chosen by the last press for as long as the button is held.
#[derive(Default, Debug)]
pub struct Brush {
    paint: Option<bool>,
}

impl Brush {
    pub fn paint(&self) -> Option<bool> {
        self.paint
    }

    pub fn apply(&mut self, life: &mut Life, stroke: &Stroke) {
        if stroke.pressed {
            self.paint = stroke
                .press_cell
                .and_then(|(x, y)| match life.toggle(x, y) {
                    Ok(alive) => Some(alive),
                    Err(err) => {
                        warn!("ignoring click: {err}");
                        None
                    }
                });
        }

        let Some(alive) = self.paint else {
            return;
        };
        if !stroke.held {
            self.paint = None;
            return;
        }
        if stroke.from != stroke.to {
            life.grid_mut().set_line(stroke.from, stroke.to, alive);
        }
    }
}
