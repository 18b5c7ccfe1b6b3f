//! Inter-task communication
//!
//! Static channels and flags shared between Embassy tasks. Uses
//! embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use bematist_core::scheduler::CancelToken;

use crate::tasks::GaitCommand;

/// Channel capacity for gait commands
const COMMAND_CHANNEL_SIZE: usize = 4;

/// Gait commands for the motion task
pub static GAIT_COMMANDS: Channel<CriticalSectionRawMutex, GaitCommand, COMMAND_CHANNEL_SIZE> =
    Channel::new();

/// Cancels an in-progress walk; sampled by the motion task once per beat
pub static WALK_CANCEL: CancelToken = CancelToken::new();
