// Replication session: the Idle -> Active polling loop driving a world collaborator

use std::thread;
use std::time::Duration;

use log::{debug, info, trace, warn};

use crate::replication::replicator::Replicator;
use crate::symmetries::SymmetrySpec;
use crate::world::{BlockPos, HitEvent, World};
use crate::Result;

/// Pause between two polls. Injected so the loop can run without real delays.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// Sleeps the current thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Transforms are built, events are not yet consumed
    Idle,
    /// Polling for hits; only process termination leaves this state
    Active,
}

/// Replays every observed block edit through the replicator.
pub struct Session<W: World, S: Sleeper> {
    world: W,
    replicator: Replicator,
    sleeper: S,
    poll_interval: Duration,
    state: SessionState,
}

impl<W: World, S: Sleeper> Session<W, S> {
    pub fn new(world: W, replicator: Replicator, sleeper: S, poll_interval: Duration) -> Self {
        Self {
            world,
            replicator,
            sleeper,
            poll_interval,
            state: SessionState::Idle,
        }
    }

    /// Read the player position from the world and build the transforms around it
    pub fn start(
        mut world: W,
        spec: &SymmetrySpec,
        sleeper: S,
        poll_interval: Duration,
    ) -> Result<Self> {
        let position = world.player_position()?;
        let replicator = Replicator::from_player_position(&position, spec);
        Ok(Self::new(world, replicator, sleeper, poll_interval))
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn replicator(&self) -> &Replicator {
        &self.replicator
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Enable all-hit reporting, announce the copy count and drop stale events
    pub fn activate(&mut self) -> Result<()> {
        if self.state == SessionState::Active {
            return Ok(());
        }

        self.world.restrict_hits_to_sword(false)?;
        let copies = self.replicator.copy_count();
        self.world
            .post_to_chat(&format!("Will be drawing {} copies", copies))?;
        self.world.clear_events()?;

        self.state = SessionState::Active;
        info!("Session active, drawing {} copies per edit", copies);
        Ok(())
    }

    /// Poll once, replicate every hit of the batch, then sleep one quantum.
    ///
    /// Returns the number of hits processed.
    pub fn poll_once(&mut self) -> Result<usize> {
        self.activate()?;

        let hits = self.world.poll_block_hits()?;
        if !hits.is_empty() {
            debug!("Processing {} hit(s)", hits.len());
        }
        for hit in &hits {
            self.handle_hit(hit)?;
        }

        self.sleeper.sleep(self.poll_interval);
        Ok(hits.len())
    }

    /// Poll forever. Only returns when the world fails.
    pub fn run(&mut self) -> Result<()> {
        self.activate()?;
        loop {
            self.poll_once()?;
        }
    }

    /// Mirror a broken block (if it is now air) and the block on the hit face
    pub fn handle_hit(&mut self, hit: &HitEvent) -> Result<()> {
        trace!(
            "Hit at ({}, {}, {}) face {}",
            hit.position.x,
            hit.position.y,
            hit.position.z,
            hit.face
        );
        self.copy_block(&hit.position, true)?;

        match hit.adjacent() {
            Some(adjacent) => {
                self.copy_block(&adjacent, false)?;
            }
            None => warn!("Ignoring placement for unknown face index {}", hit.face),
        }
        Ok(())
    }

    /// Write the block at `position` to all of its symmetric copies.
    ///
    /// With `air_only`, nothing is written unless the block is air.
    fn copy_block(&mut self, position: &BlockPos, air_only: bool) -> Result<usize> {
        let state = self.world.block_at(position)?;
        if air_only && !state.is_air() {
            return Ok(0);
        }

        let targets = self.replicator.replicate_block(position);
        for target in &targets {
            self.world.set_block(target, &state)?;
        }
        Ok(targets.len())
    }
}
