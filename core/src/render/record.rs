//! A context that records the commands it executes.

use alloc::vec::Vec;
use core::mem;

use super::{Command, Gl, State};

/// A rendering context that produces no pixels, only a log of commands.
///
/// Commands are also applied to a [`State`], so the resulting transforms,
/// lights, and materials can be inspected. Useful for testing code that
/// drives a context, and for replaying commands into another one.
///
/// # Examples
/// ```
/// use polyview_core::render::{Command, Gl, Recorder};
///
/// let mut gl = Recorder::new();
/// gl.load_identity();
/// assert_eq!(gl.commands(), [Command::LoadIdentity]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    cmds: Vec<Command>,
    state: State,
}

impl Recorder {
    /// Returns a recorder with no commands and the default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the commands recorded so far, in execution order.
    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }

    /// Returns the state resulting from the recorded commands.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Removes and returns the recorded commands. The state is kept.
    pub fn take(&mut self) -> Vec<Command> {
        mem::take(&mut self.cmds)
    }

    /// Executes the recorded commands, in order, on another context.
    pub fn replay(&self, gl: &mut impl Gl) {
        for cmd in &self.cmds {
            gl.exec(cmd.clone());
        }
    }
}

impl Gl for Recorder {
    fn exec(&mut self, cmd: Command) {
        self.state.exec(&cmd);
        self.cmds.push(cmd);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Mat4, Vec3, translate};

    #[test]
    fn records_and_tracks_state() {
        let mut gl = Recorder::new();
        gl.translate(Vec3::X);
        gl.translate(Vec3::Y);

        assert_eq!(gl.commands().len(), 2);
        assert_eq!(gl.state().modelview, translate(Vec3::X + Vec3::Y));
    }

    #[test]
    fn take_keeps_state() {
        let mut gl = Recorder::new();
        gl.translate(Vec3::X);

        assert_eq!(gl.take(), [Command::Translate(Vec3::X)]);
        assert!(gl.commands().is_empty());
        assert_ne!(gl.state().modelview, Mat4::IDENTITY);
    }

    #[test]
    fn replay_reproduces_state() {
        let mut a = Recorder::new();
        a.translate(Vec3::Z);
        a.load_identity();
        a.translate(Vec3::X);

        let mut b = Recorder::new();
        a.replay(&mut b);
        assert_eq!(a.commands(), b.commands());
        assert_eq!(b.state().modelview, translate(Vec3::X));
    }
}
