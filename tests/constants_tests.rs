// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn population_and_selection_sizes_are_consistent() {
    assert!(PARTICLE_COUNT > 0);
    assert!(HALO_CONNECTIONS > 0);
    assert!(HALO_CONNECTIONS <= PARTICLE_COUNT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn distances_are_positive_and_ordered() {
    assert!(CONNECT_DISTANCE > 0.0);
    assert!(FOLLOW_LENGTH > 0.0);
    assert!(CORRECTION_BAND > 0.0);
    // The capture radius sits inside the mesh cutoff, so captured particles
    // stay meshed to their neighbors.
    assert!(FOLLOW_LENGTH < CONNECT_DISTANCE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_are_fractions() {
    assert!(HALO_EASING > 0.0 && HALO_EASING < 1.0);
    assert!(SPEED_DECAY > 0.0 && SPEED_DECAY < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacity_bounds_are_ordered_unit_fractions() {
    assert!(HALO_OPACITY_MIN > 0.0);
    assert!(HALO_OPACITY_MIN < HALO_OPACITY_MAX);
    assert!(HALO_OPACITY_MAX <= 1.0);
    assert!(MESH_OPACITY_SCALE > 0.0 && MESH_OPACITY_SCALE <= 1.0);
    assert!(HALO_POLYGON_OPACITY > 0.0 && HALO_POLYGON_OPACITY <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn halo_radius_bounds_never_divide_by_zero() {
    // radial_opacity divides by the smoothed radius, which the easing keeps
    // inside [min, max].
    assert!(HALO_RADIUS_MIN > 0.0);
    assert!(HALO_RADIUS_MIN < HALO_RADIUS_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_sizes_are_positive() {
    assert!(PARTICLE_SIZE_MIN > 0.0);
    assert!(PARTICLE_SIZE_SPAN > 0.0);
    assert!(SPEED_LIMIT > 0.0);
}
