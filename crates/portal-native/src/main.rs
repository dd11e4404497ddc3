use std::thread;
use std::time::Duration;

use anyhow::Context;
use glam::{Quat, Vec3};
use instant::Instant;
use rand::prelude::*;

use portal_core::snapshot::{self, Publisher};
use portal_core::{
    DeviceTilt, EffectToggles, FrameInput, HeadTracker, MeshBoundaryExtractor, MotionSample,
    PortalConfig, PortalScene, RawHeadSample, ScreenGeometry,
};

const FRAME_HZ: f64 = 60.0;
const HEAD_HZ: f64 = 30.0;
const MOTION_HZ: f64 = 60.0;
const DEFAULT_FRAMES: u32 = 600;
const LOG_EVERY_FRAMES: u32 = 60;

// ---------------- Simulated sensors ----------------

/// Head swaying side to side at ~45 cm with tracking jitter.
fn run_head_sensor(publisher: Publisher<RawHeadSample>, seconds: f64, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = Instant::now();
    let period = Duration::from_secs_f64(1.0 / HEAD_HZ);
    loop {
        let t = start.elapsed().as_secs_f64();
        if t > seconds {
            break;
        }
        let jitter = Vec3::new(
            rng.gen_range(-0.002..0.002),
            rng.gen_range(-0.002..0.002),
            rng.gen_range(-0.003..0.003),
        );
        let sway = Vec3::new(
            0.06 * (t * 0.9).sin() as f32,
            0.02 * (t * 0.5).sin() as f32,
            // anchor z faces away from the screen
            -(0.45 + 0.05 * (t * 0.3).cos() as f32),
        );
        let sample = RawHeadSample {
            translation: sway + jitter,
            timestamp: t,
        };
        if !publisher.publish(sample) {
            break;
        }
        thread::sleep(period);
    }
}

/// Device rocking about pitch and roll.
fn run_motion_sensor(publisher: Publisher<MotionSample>, seconds: f64, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = Instant::now();
    let period = Duration::from_secs_f64(1.0 / MOTION_HZ);
    loop {
        let t = start.elapsed().as_secs_f64();
        if t > seconds {
            break;
        }
        let pitch = 0.15 * (t * 1.3).sin() as f32;
        let roll = 0.2 * (t * 0.8).sin() as f32;
        let rotation_rate = Vec3::new(
            0.15 * 1.3 * (t * 1.3).cos() as f32 + rng.gen_range(-0.05..0.05),
            0.2 * 0.8 * (t * 0.8).cos() as f32 + rng.gen_range(-0.05..0.05),
            rng.gen_range(-0.02..0.02),
        );
        let sample = MotionSample {
            attitude: Quat::from_rotation_x(pitch) * Quat::from_rotation_y(roll),
            rotation_rate,
        };
        if !publisher.publish(sample) {
            break;
        }
        thread::sleep(period);
    }
}

// ---------------- Synthetic face mesh ----------------

/// Flat grid with two rectangular holes standing in for eyes.
fn synthetic_face_mesh() -> (Vec<Vec3>, Vec<u16>) {
    const N: u16 = 12;
    let step = 0.16 / N as f32;
    let mut vertices = Vec::new();
    for y in 0..=N {
        for x in 0..=N {
            vertices.push(Vec3::new(
                x as f32 * step - 0.08,
                y as f32 * step - 0.08,
                0.01,
            ));
        }
    }
    let is_eye = |x: u16, y: u16| (7..=8).contains(&y) && ((2..=4).contains(&x) || (7..=9).contains(&x));
    let mut indices = Vec::new();
    for y in 0..N {
        for x in 0..N {
            if is_eye(x, y) {
                continue;
            }
            let i = y * (N + 1) + x;
            indices.extend_from_slice(&[i, i + 1, i + N + 1, i + 1, i + N + 2, i + N + 1]);
        }
    }
    (vertices, indices)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let frames: u32 = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("frame count must be a positive integer, got {arg:?}"))?,
        None => DEFAULT_FRAMES,
    };

    let config = PortalConfig::default();
    let screen = ScreenGeometry::for_device("iPhone16,1", (1179, 2556))?;
    let mut scene = PortalScene::new(&config, screen).context("invalid portal configuration")?;
    let mut head = HeadTracker::new(config.smoothing.head_alpha);
    let mut tilt = DeviceTilt::new(config.smoothing.tilt_alpha, config.smoothing.tilt_sensitivity);
    tilt.start();

    let (mesh_vertices, mesh_indices) = synthetic_face_mesh();
    let contours = MeshBoundaryExtractor::default().extract(&mesh_vertices, &mesh_indices);
    log::info!(
        "[mesh] {} contours, lengths {:?}",
        contours.len(),
        contours.iter().map(Vec::len).collect::<Vec<_>>()
    );

    let seconds = frames as f64 / FRAME_HZ + 0.5;
    let (head_pub, mut head_rx) = snapshot::channel();
    let (motion_pub, mut motion_rx) = snapshot::channel();
    let head_thread = thread::spawn(move || run_head_sensor(head_pub, seconds, 7));
    let motion_thread = thread::spawn(move || run_motion_sensor(motion_pub, seconds, 11));

    let toggles = EffectToggles::ALL;
    let frame_period = Duration::from_secs_f64(1.0 / FRAME_HZ);
    let mut last_instant = Instant::now();
    let mut last_head_ts = f64::NEG_INFINITY;

    for frame in 0..frames {
        let now = Instant::now();
        let dt = (now - last_instant).as_secs_f32();
        last_instant = now;

        if let Some(sample) = head_rx.latest() {
            if sample.timestamp > last_head_ts {
                last_head_ts = sample.timestamp;
                head.update(sample);
            }
        }
        if let Some(sample) = motion_rx.latest() {
            tilt.update(sample);
        }
        if frame == frames / 2 {
            head.recenter();
            tilt.reset_reference();
        }

        let input = FrameInput {
            head: head.current(),
            tilt: tilt.is_active().then(|| tilt.tilt_offset()),
            angular_velocity: tilt.rotation_rate(),
            dt,
            effects: toggles,
            line_effects: toggles,
        };
        let out = scene.step(&input);

        if frame % LOG_EVERY_FRAMES == 0 {
            let back = out.corners[7] - scene.line_effects().topology().corners()[7];
            log::info!(
                "[frame {frame}] cam=({:.3},{:.3},{:.3}) rot=({:.3},{:.3},{:.3}) slide=({:.4},{:.4}) corner7 d=({:.4},{:.4},{:.4})",
                out.camera_position.x,
                out.camera_position.y,
                out.camera_position.z,
                out.room.offset.rotation.x,
                out.room.offset.rotation.y,
                out.room.offset.rotation.z,
                out.room.offset.translation.x,
                out.room.offset.translation.y,
                back.x,
                back.y,
                back.z
            );
            log::debug!("[frame {frame}] uniforms {:?}", out.uniforms());
        }

        let spent = now.elapsed();
        if spent < frame_period {
            thread::sleep(frame_period - spent);
        }
    }

    tilt.stop();
    // dropping the receivers ends both sensor loops
    drop(head_rx);
    drop(motion_rx);
    for handle in [head_thread, motion_thread] {
        if handle.join().is_err() {
            log::error!("sensor thread panicked");
        }
    }
    let reset = scene.reset_view();
    log::info!(
        "[scene] reset: cam=({:.3},{:.3},{:.3}) zoom={:.2}",
        reset.camera_position.x,
        reset.camera_position.y,
        reset.camera_position.z,
        scene.zoom()
    );
    Ok(())
}
