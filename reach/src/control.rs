use std::sync::mpsc::{Receiver, Sender, channel};

use glam::Vec3;

use crate::core::color::palette;

/// Requests UI wiring can make of the engine without holding it.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCommand {
    Highlight(usize),
    DataFlow { from: usize, to: usize },
    Explosion { position: Vec3, color: u32 },
    GrowNetwork(usize),
}

impl SceneCommand {
    pub const DEFAULT_GROWTH: usize = 5;
    pub const DEFAULT_EXPLOSION_COLOR: u32 = palette::BLUE;

    pub fn grow() -> Self {
        SceneCommand::GrowNetwork(Self::DEFAULT_GROWTH)
    }

    pub fn explosion_at(position: Vec3) -> Self {
        SceneCommand::Explosion {
            position,
            color: Self::DEFAULT_EXPLOSION_COLOR,
        }
    }
}

pub struct CommandQueue {
    receiver: Receiver<SceneCommand>,
}

#[derive(Clone)]
pub struct CommandSender {
    sender: Sender<SceneCommand>,
}

impl CommandQueue {
    pub fn new() -> (Self, CommandSender) {
        let (sender, receiver) = channel();
        (Self { receiver }, CommandSender { sender })
    }

    pub fn try_recv(&self) -> Option<SceneCommand> {
        self.receiver.try_recv().ok()
    }

    /// Everything queued so far, oldest first.
    pub fn drain(&self) -> impl Iterator<Item = SceneCommand> + '_ {
        self.receiver.try_iter()
    }
}

impl CommandSender {
    pub fn send(&self, cmd: SceneCommand) {
        if self.sender.send(cmd).is_err() {
            tracing::debug!(target: "engine", "command dropped, queue closed");
        }
    }
}
