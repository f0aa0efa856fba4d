//! Controller slots and controller identity.
//!
//! An AI slot binds one brain to at most one tank entity (possession,
//! 1:1 at any instant). Slots are addressed by id; the engine owns the
//! map and the possession lifecycle.

use hecs::Entity;

use ironclad_ai::fsm::AiBrain;

/// Capability interface for anything that can name the tank it drives.
/// Display-name resolution dispatches over this instead of inspecting
/// the concrete controller type.
pub trait ControllerIdentity {
    fn display_name(&self) -> String;
}

/// One AI controller: decision state plus its possessed tank, if any.
/// The slot is inert while `tank` is unset.
pub struct AiControllerSlot {
    pub brain: AiBrain,
    pub tank: Option<Entity>,
    /// 1-based sequence number shared across all AI controllers,
    /// assigned at construction.
    pub com_number: u32,
}

impl AiControllerSlot {
    pub fn new(com_number: u32) -> Self {
        Self {
            brain: AiBrain::default(),
            tank: None,
            com_number,
        }
    }
}

impl ControllerIdentity for AiControllerSlot {
    fn display_name(&self) -> String {
        format!("COM {}", self.com_number)
    }
}

/// The human seat. Exists so name resolution can dispatch over the same
/// capability interface for both controller kinds.
#[derive(Debug, Default)]
pub struct PlayerSeat {
    pub callsign: Option<String>,
}

impl ControllerIdentity for PlayerSeat {
    fn display_name(&self) -> String {
        self.callsign
            .clone()
            .unwrap_or_else(|| "PLAYER 1".to_string())
    }
}
