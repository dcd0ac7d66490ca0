//! Compatibility rules between the parts of a resolved kit
//!
//! Each rule is a pure function over a [`ResolvedKit`]. A rule that cannot
//! find the attributes it compares (a slot holding the wrong kind of part)
//! is skipped rather than failed. All rules run; none short-circuits.

use crate::core::kit::ResolvedKit;
use crate::core::reason::FailureReason;

/// Headroom, in watts, the PSU must provide above the CPU and GPU TDP.
pub const PSU_SAFETY_MARGIN_WATTS: u64 = 50;

pub fn check_socket(kit: &ResolvedKit<'_>) -> Option<FailureReason> {
    match (kit.cpu.spec.socket(), kit.motherboard.spec.socket()) {
        (Some(cpu_socket), Some(board_socket)) if cpu_socket != board_socket => {
            Some(FailureReason::SocketMismatch)
        }
        _ => None,
    }
}

pub fn check_ram_type(kit: &ResolvedKit<'_>) -> Option<FailureReason> {
    match (kit.ram.spec.ram_type(), kit.motherboard.spec.ram_type()) {
        (Some(ram_type), Some(board_type)) if ram_type != board_type => {
            Some(FailureReason::RamTypeMismatch)
        }
        _ => None,
    }
}

/// Minimum PSU wattage for the given CPU and GPU TDP.
pub fn required_wattage(cpu_tdp: u32, gpu_tdp: u32) -> u64 {
    u64::from(cpu_tdp) + u64::from(gpu_tdp) + PSU_SAFETY_MARGIN_WATTS
}

pub fn check_power(kit: &ResolvedKit<'_>) -> Option<FailureReason> {
    let wattage = kit.psu.spec.wattage()?;
    let cpu_tdp = kit.cpu.spec.tdp()?;
    let gpu_tdp = kit.gpu.spec.tdp()?;

    if u64::from(wattage) < required_wattage(cpu_tdp, gpu_tdp) {
        Some(FailureReason::InsufficientPower)
    } else {
        None
    }
}

/// Runs every compatibility rule and returns the violations in rule order.
pub fn check_compatibility(kit: &ResolvedKit<'_>) -> Vec<FailureReason> {
    [check_socket(kit), check_ram_type(kit), check_power(kit)]
        .into_iter()
        .flatten()
        .collect()
}
