use glam::Vec3;

use crate::control::SceneCommand;
use crate::core::color::{Color, palette};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelButton {
    pub label: &'static str,
    pub rect: Rect,
    pub command: SceneCommand,
}

impl PanelButton {
    pub fn background(&self, hovered: bool) -> Color {
        Color::from_hex(palette::BLUE).with_alpha(if hovered { 1.0 } else { 0.8 })
    }
}

/// The row of trigger buttons pinned to the bottom-right of the container.
#[derive(Debug, Clone)]
pub struct ControlPanel {
    pub margin: f32,
    pub gap: f32,
    pub button_height: f32,
    /// Approximate advance of one label glyph.
    pub glyph_width: f32,
    pub padding_x: f32,
    buttons: Vec<(&'static str, SceneCommand)>,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            margin: 20.0,
            gap: 10.0,
            button_height: 32.0,
            glyph_width: 7.0,
            padding_x: 16.0,
            buttons: vec![
                ("Grow Network", SceneCommand::grow()),
                (
                    "Explosion",
                    SceneCommand::Explosion {
                        position: Vec3::ZERO,
                        color: palette::PINK,
                    },
                ),
                ("Data Flow", SceneCommand::DataFlow { from: 0, to: 5 }),
            ],
        }
    }
}

impl ControlPanel {
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    fn button_width(&self, label: &str) -> f32 {
        label.chars().count() as f32 * self.glyph_width + self.padding_x * 2.0
    }

    /// Button rectangles for a container of the given size, left to right.
    pub fn layout(&self, width: f32, height: f32) -> Vec<PanelButton> {
        let total: f32 = self
            .buttons
            .iter()
            .map(|(label, _)| self.button_width(label))
            .sum::<f32>()
            + self.gap * self.buttons.len().saturating_sub(1) as f32;

        let y = height - self.margin - self.button_height;
        let mut x = width - self.margin - total;

        self.buttons
            .iter()
            .map(|(label, command)| {
                let button_width = self.button_width(label);
                let rect = Rect {
                    x,
                    y,
                    width: button_width,
                    height: self.button_height,
                };
                x += button_width + self.gap;
                PanelButton {
                    label,
                    rect,
                    command: command.clone(),
                }
            })
            .collect()
    }

    pub fn hit_test(&self, width: f32, height: f32, x: f32, y: f32) -> Option<SceneCommand> {
        self.layout(width, height)
            .into_iter()
            .find(|button| button.rect.contains(x, y))
            .map(|button| button.command)
    }
}
