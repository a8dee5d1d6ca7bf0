// Host-side tests for uniform packing and the named-uniform upload contract.

use glam::Vec2;
use shockwave_core::*;

#[derive(Default)]
struct RecordingSink {
    ints: Vec<(String, i32)>,
    vec2s: Vec<(String, Vec2)>,
    arrays: Vec<(String, Vec<f32>)>,
}

impl UniformSink for RecordingSink {
    fn set_uniform_int(&mut self, name: &str, value: i32) {
        self.ints.push((name.to_string(), value));
    }
    fn set_uniform_vec2(&mut self, name: &str, value: Vec2) {
        self.vec2s.push((name.to_string(), value));
    }
    fn set_uniform_float_array(&mut self, name: &str, values: &[f32]) {
        self.arrays.push((name.to_string(), values.to_vec()));
    }
}

impl RecordingSink {
    fn array(&self, name: &str) -> &[f32] {
        &self
            .arrays
            .iter()
            .find(|(n, _)| n == name)
            .unwrap_or_else(|| panic!("{name} was not uploaded"))
            .1
    }
}

fn registry_with(centers: &[(f32, f32)]) -> ShockwaveRegistry {
    let mut reg = ShockwaveRegistry::new();
    for (i, (x, y)) in centers.iter().enumerate() {
        reg.trigger(
            Vec2::new(*x, *y),
            1000.0,
            50.0,
            0.1 * (i + 1) as f32,
            0.01 * (i + 1) as f32,
        );
    }
    reg
}

#[test]
fn eased_progress_endpoints() {
    assert_eq!(eased_progress(0.0), 0.0);
    assert!((eased_progress(1.0) - 1.0).abs() < 1e-6);
}

#[test]
fn eased_progress_is_monotonic_and_front_loaded() {
    let mut prev = eased_progress(0.0);
    for i in 1..=100 {
        let a = i as f32 / 100.0;
        let t = eased_progress(a);
        assert!(t > prev, "not increasing at age {a}");
        assert!(t >= a, "eased curve should lead linear age at {a}");
        prev = t;
    }
    assert!((eased_progress(0.5) - 0.5f32.powf(1.0 / 1.5)).abs() < 1e-6);
}

#[test]
fn eased_progress_clamps_negative_age() {
    assert_eq!(eased_progress(-0.3), 0.0);
}

#[test]
fn center_y_is_flipped_to_bottom_left_origin() {
    let mut reg = registry_with(&[(0.3, 0.2)]);
    reg.advance(16.0);
    let packed = PackedShockwaves::pack(reg.live_instances(), Viewport::default());
    assert_eq!(packed.count, 1);
    assert!((packed.center_y[0] - 0.8).abs() < 1e-6);
    assert!((packed.center_x[0] - 0.3).abs() < 1e-6);
}

#[test]
fn aspect_ratio_for_800x600() {
    let vp = Viewport::new(800, 600).expect("valid viewport");
    let aspect = vp.aspect_ratio();
    assert_eq!(aspect.x, 1.0);
    assert!((aspect.y - 800.0 / 600.0).abs() < 1e-6);
    // distances along y are scaled by 0.75 once divided by the aspect
    assert!((1.0 / aspect.y - 0.75).abs() < 1e-6);
}

#[test]
fn zero_sized_viewport_is_rejected() {
    assert_eq!(
        Viewport::new(0, 600),
        Err(ShockwaveError::InvalidViewport {
            width: 0,
            height: 600
        })
    );
    assert!(Viewport::new(800, 0).is_err());
}

#[test]
fn normalize_px_maps_pointer_pixels_into_unit_square() {
    let vp = Viewport::new(800, 600).expect("valid viewport");
    assert_eq!(vp.normalize_px(400.0, 150.0), Vec2::new(0.5, 0.25));
    assert_eq!(vp.normalize_px(-10.0, 900.0), Vec2::new(0.0, 1.0));
}

#[test]
fn pack_copies_radius_thickness_and_eases_age() {
    let mut reg = registry_with(&[(0.1, 0.1), (0.9, 0.9)]);
    for _ in 0..5 {
        reg.advance(16.0);
    }
    let packed = PackedShockwaves::pack(reg.live_instances(), Viewport::default());
    assert_eq!(packed.len(), 2);
    for (i, s) in reg.live_instances().iter().enumerate() {
        assert_eq!(packed.t[i], eased_progress(s.age()));
        assert_eq!(packed.max_radius[i], s.max_radius);
        assert_eq!(packed.thickness[i], s.thickness);
    }
    // unused slots stay zero
    assert!(packed.t[2..].iter().all(|v| *v == 0.0));
}

#[test]
fn repack_clears_stale_slots() {
    let mut reg = registry_with(&[(0.1, 0.1), (0.2, 0.2), (0.3, 0.3)]);
    let mut packed = PackedShockwaves::pack(reg.live_instances(), Viewport::default());
    assert_eq!(packed.count, 3);
    reg.enforce_capacity(1);
    packed.repack(reg.live_instances(), Viewport::default());
    assert_eq!(packed.count, 1);
    assert_eq!(packed.max_radius[1], 0.0);
    assert_eq!(packed.max_radius[2], 0.0);
}

#[test]
fn upload_uses_exact_uniform_names_and_live_lengths() {
    let mut reg = registry_with(&[(0.1, 0.2), (0.3, 0.4), (0.5, 0.6)]);
    reg.advance(16.0);
    let packed = PackedShockwaves::pack(reg.live_instances(), Viewport::new(800, 600).unwrap());

    let mut sink = RecordingSink::default();
    packed.upload(&mut sink);

    assert_eq!(sink.ints, vec![("u_numShockwaves".to_string(), 3)]);
    assert_eq!(sink.vec2s.len(), 1);
    assert_eq!(sink.vec2s[0].0, "u_aspectRatio");
    for name in ["u_t", "u_centerX", "u_centerY", "u_maxRadius", "u_thickness"] {
        assert_eq!(sink.array(name).len(), 3, "{name}");
    }
    assert!((sink.array("u_centerY")[1] - 0.6).abs() < 1e-6);
}

#[test]
fn empty_registry_uploads_zero_count() {
    let reg = ShockwaveRegistry::new();
    let packed = PackedShockwaves::pack(reg.live_instances(), Viewport::default());
    let mut sink = RecordingSink::default();
    packed.upload(&mut sink);
    assert_eq!(sink.ints[0].1, 0);
    assert!(sink.array("u_t").is_empty());
}

#[test]
fn uniform_block_mirrors_packed_arrays() {
    let mut reg = registry_with(&[(0.1, 0.2), (0.3, 0.4), (0.5, 0.6), (0.7, 0.8), (0.9, 0.1)]);
    reg.advance(16.0);
    let packed = PackedShockwaves::pack(reg.live_instances(), Viewport::new(1280, 720).unwrap());
    let block = packed.to_uniforms();

    assert_eq!(block.count(), 5);
    assert_eq!(block.num_shockwaves, 5);
    for i in 0..5 {
        assert_eq!(block.t_at(i), packed.t[i]);
        assert_eq!(block.center_at(i), Vec2::new(packed.center_x[i], packed.center_y[i]));
        assert_eq!(block.max_radius_at(i), packed.max_radius[i]);
        assert_eq!(block.thickness_at(i), packed.thickness[i]);
    }
    // element 4 is the first lane of the second vec4
    assert_eq!(block.center_x[1][0], packed.center_x[4]);
    assert_eq!(block.aspect_ratio, [1.0, 1280.0 / 720.0]);
}

#[test]
fn uniform_block_ignores_unknown_names() {
    let mut block = ShockwaveUniforms::default();
    block.set_uniform_float_array("u_bogus", &[1.0, 2.0]);
    block.set_uniform_int("u_other", 3);
    assert_eq!(block, ShockwaveUniforms::default());
}

#[test]
fn bundled_shader_declares_every_uniform() {
    for name in [
        U_T,
        U_CENTER_X,
        U_CENTER_Y,
        U_MAX_RADIUS,
        U_THICKNESS,
        U_NUM_SHOCKWAVES,
        U_ASPECT_RATIO,
    ] {
        assert!(SHOCKWAVE_WGSL.contains(name), "{name} missing from shockwave.wgsl");
    }
    assert!(SHOCKWAVE_WGSL.contains(&format!("MAX_SHOCKWAVES: i32 = {MAX_SHOCKWAVES}")));
}
