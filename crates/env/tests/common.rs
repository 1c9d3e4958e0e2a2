use sim::{Pose, Simulator, Vec3};

/// Simulator double driven by a pre-programmed terminal-flag sequence.
///
/// The pose's x component counts timesteps, so observations reveal
/// exactly which snapshots a task sampled and in what order. Stepping
/// past the end of the script panics, which catches extra timesteps.
pub struct ScriptedSim {
    dones: Vec<bool>,
    cursor: usize,
}

impl ScriptedSim {
    pub fn new(dones: &[bool]) -> Self {
        Self {
            dones: dones.to_vec(),
            cursor: 0,
        }
    }

    /// Timesteps advanced since construction or the last reset.
    pub fn ticks(&self) -> usize {
        self.cursor
    }
}

impl Simulator for ScriptedSim {
    fn next_timestep(&mut self, _rotor_speeds: [f32; 4]) -> bool {
        let done = self.dones[self.cursor];
        self.cursor += 1;
        done
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }

    fn pose(&self) -> Pose {
        Pose::new(Vec3::new(self.cursor as f32, 0.0, 0.0), Vec3::ZERO)
    }

    fn velocity(&self) -> Vec3 {
        Vec3::ZERO
    }

    fn time(&self) -> f32 {
        self.cursor as f32
    }
}
