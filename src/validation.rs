//! Input validation for disk scheduling runs.
//!
//! Checks that a head position, a disk size, and a request list are
//! mutually consistent before any policy runs. Detects:
//! - Non-positive (or unrepresentable) disk sizes
//! - Head positions outside `[0, disk_size)`
//! - Empty request sets
//! - Requests outside `[0, disk_size)`
//! - Timing constants that would produce non-finite times
//!
//! Validation fails fast on the first problem found, checked in the
//! order listed above.

use log::debug;

use crate::error::InputError;
use crate::models::{Direction, DiskGeometry, SchedulingContext, SchedulingRequest};

/// Validation result.
pub type ValidationResult<T> = Result<T, InputError>;

/// Validates raw caller input into a scheduling context and request set.
///
/// Values arrive as `i64` so negative input from a text field or slider
/// is reported as [`InputError::OutOfBounds`] instead of wrapping.
///
/// # Errors
/// - [`InputError::InvalidGeometry`] if `disk_size <= 0`, `disk_size`
///   exceeds `u32::MAX`, or `head_position >= disk_size`.
/// - [`InputError::OutOfBounds`] if the head or any request is negative,
///   or a request is `>= disk_size`.
/// - [`InputError::EmptyRequestSet`] if `requests` is empty.
pub fn validate_request(
    head_position: i64,
    disk_size: i64,
    direction: Direction,
    requests: &[i64],
) -> ValidationResult<(SchedulingContext, SchedulingRequest)> {
    let invalid_geometry = || InputError::InvalidGeometry {
        disk_size,
        head_position,
    };

    let size = u32::try_from(disk_size)
        .ok()
        .filter(|&s| s > 0)
        .ok_or_else(invalid_geometry)?;

    if head_position < 0 {
        return Err(InputError::OutOfBounds {
            value: head_position,
            disk_size,
        });
    }
    if head_position >= disk_size {
        return Err(invalid_geometry());
    }

    if requests.is_empty() {
        return Err(InputError::EmptyRequestSet);
    }

    let cylinders = requests
        .iter()
        .map(|&value| to_cylinder(value, disk_size))
        .collect::<ValidationResult<Vec<u32>>>()?;

    // head_position is in [0, disk_size) and disk_size fits u32
    let head = head_position as u32;

    debug!(
        "validated input: head={head}, disk_size={size}, direction={direction}, {} requests",
        cylinders.len()
    );

    Ok((
        SchedulingContext::new(head, direction, size),
        SchedulingRequest::new(cylinders),
    ))
}

/// Validates the timing constants of a geometry.
///
/// Rotation speed and transfer rate are divisors and must be finite and
/// positive. The seek rate may be zero but not negative.
pub fn validate_geometry(geometry: &DiskGeometry) -> ValidationResult<()> {
    if geometry.disk_size == 0 {
        return Err(InputError::InvalidGeometry {
            disk_size: 0,
            head_position: 0,
        });
    }
    check_positive("rotation_speed_rpm", geometry.rotation_speed_rpm)?;
    check_positive(
        "transfer_rate_bytes_per_ms",
        geometry.transfer_rate_bytes_per_ms,
    )?;
    let seek = geometry.seek_rate_ms_per_cylinder;
    if !seek.is_finite() || seek < 0.0 {
        return Err(InputError::InvalidDiskConstant {
            parameter: "seek_rate_ms_per_cylinder",
            value: seek,
        });
    }
    Ok(())
}

fn check_positive(parameter: &'static str, value: f64) -> ValidationResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(InputError::InvalidDiskConstant { parameter, value })
    }
}

fn to_cylinder(value: i64, disk_size: i64) -> ValidationResult<u32> {
    if (0..disk_size).contains(&value) {
        // disk_size already fits u32
        Ok(value as u32)
    } else {
        Err(InputError::OutOfBounds { value, disk_size })
    }
}
