use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{Anchor, MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::{Window, WindowPlugin};

use crate::simulation::integrator::euler_step;
use crate::simulation::scenario::Scenario;

/// Component tagging each circle with its body index into Scenario.system.bodies
#[derive(Component)]
struct BodyIndex(pub usize);

/// Distance readout beside a non-primary body
#[derive(Component)]
struct DistanceLabel {
    body: usize,
    last: f64, // last rendered distance, NAN forces the first render
}

/// "Years on <planet>" readout in the lower-left corner
#[derive(Component)]
struct YearCounter {
    body: usize,
    period_secs: f64,
    last_year: f64, // re-render only when the whole-year count changes
}

const WINDOW_WIDTH: f32 = 1200.0;
const WINDOW_HEIGHT: f32 = 800.0;
const FONT_SIZE: f32 = 16.0;
const LEGEND_PADDING: f32 = 20.0;

/// Exponent shaping the trail fade; higher fades the tail out faster
const TRAIL_FADE_EXPONENT: f32 = 2.0;

/// Orbital period for the year counters, seconds; only bodies with a known
/// period get a counter
fn orbital_period_secs(name: &str) -> Option<f64> {
    let days = match name {
        "Mercury" => 88.0,
        "Venus" => 224.7,
        "Earth" => 365.25,
        "Mars" => 687.0,
        _ => return None,
    };
    Some(days * 24.0 * 3600.0)
}

pub fn run_2d(scenario: Scenario) {
    println!(
        "run_2d: starting Bevy 2D viewer with {} bodies",
        scenario.system.bodies.len()
    );

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Celestial Dance: Time's Relative Nature".into(),
                resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .add_systems(Startup, setup_system)
        .add_systems(
            Update,
            (
                physics_step_system,
                sync_transforms_system,
                draw_trails_system,
                distance_label_system,
                year_counter_system,
            ),
        )
        .run();
}

fn setup_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera, fixed at the origin
    commands.spawn(Camera2dBundle::default());

    let scale = scenario.parameters.scale;
    let text_style = TextStyle {
        font_size: FONT_SIZE,
        color: Color::WHITE,
        ..Default::default()
    };

    for (i, body) in scenario.system.bodies.iter().enumerate() {
        let color = Color::srgb_u8(body.color[0], body.color[1], body.color[2]);
        let x = (body.x.x * scale) as f32;
        let y = (body.x.y * scale) as f32;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius as f32))),
                material: materials.add(ColorMaterial::from(color)),
                transform: Transform::from_xyz(x, y, 1.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));

        // Distance readout follows every non-primary body
        if !body.primary {
            commands.spawn((
                Text2dBundle {
                    text: Text::from_section("", text_style.clone()),
                    text_anchor: Anchor::CenterLeft,
                    transform: Transform::from_xyz(x, y, 2.0),
                    ..Default::default()
                },
                DistanceLabel {
                    body: i,
                    last: f64::NAN,
                },
            ));
        }
    }

    spawn_legend(&mut commands, &scenario, &mut meshes, &mut materials, &text_style);
    spawn_year_counters(&mut commands, &scenario, &text_style);
}

/// Color dot + name per body, lower right corner
fn spawn_legend(
    commands: &mut Commands,
    scenario: &Scenario,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    text_style: &TextStyle,
) {
    let start_x = WINDOW_WIDTH / 2.0 - 200.0;
    let mut y = -WINDOW_HEIGHT / 2.0 + LEGEND_PADDING * scenario.system.bodies.len() as f32;

    for body in &scenario.system.bodies {
        let color = Color::srgb_u8(body.color[0], body.color[1], body.color[2]);

        commands.spawn(MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(Circle::new(10.0))),
            material: materials.add(ColorMaterial::from(color)),
            transform: Transform::from_xyz(start_x, y, 2.0),
            ..Default::default()
        });
        commands.spawn(Text2dBundle {
            text: Text::from_section(body.name.clone(), text_style.clone()),
            text_anchor: Anchor::CenterLeft,
            transform: Transform::from_xyz(start_x + 15.0, y, 2.0),
            ..Default::default()
        });

        y -= LEGEND_PADDING;
    }
}

/// Elapsed-years readouts, lower left corner, slowest orbit at the bottom
fn spawn_year_counters(commands: &mut Commands, scenario: &Scenario, text_style: &TextStyle) {
    let start_x = -WINDOW_WIDTH / 2.0 + 10.0;
    let mut y = -WINDOW_HEIGHT / 2.0 + 10.0;

    for name in ["Mars", "Earth", "Venus", "Mercury"] {
        let found = scenario
            .system
            .bodies
            .iter()
            .position(|b| b.name == name)
            .zip(orbital_period_secs(name));

        if let Some((body, period_secs)) = found {
            commands.spawn((
                Text2dBundle {
                    text: Text::from_section("", text_style.clone()),
                    text_anchor: Anchor::BottomLeft,
                    transform: Transform::from_xyz(start_x, y, 2.0),
                    ..Default::default()
                },
                YearCounter {
                    body,
                    period_secs,
                    last_year: f64::NAN,
                },
            ));
            y += LEGEND_PADDING;
        }
    }
}

/// Advance the simulation by exactly one fixed tick per render frame
fn physics_step_system(mut scenario: ResMut<Scenario>) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        system, parameters, ..
    } = &mut *scenario;

    euler_step(system, parameters);
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let scale = scenario.parameters.scale;
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            transform.translation.x = (b.x.x * scale) as f32;
            transform.translation.y = (b.x.y * scale) as f32;
        }
    }
}

/// Redraw every body's orbit trail as a polyline fading toward the tail
fn draw_trails_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    let scale = scenario.parameters.scale;

    for body in &scenario.system.bodies {
        let n = body.trail.len();
        if n < 2 {
            continue;
        }

        let [r, g, b] = body.color;
        let base = Color::srgb_u8(r, g, b).to_srgba();

        for (i, (p0, p1)) in body.trail.iter().zip(body.trail.iter().skip(1)).enumerate() {
            let fade = ((i + 1) as f32 / (n - 1) as f32).powf(TRAIL_FADE_EXPONENT);
            let color = Color::srgba(base.red, base.green, base.blue, fade);

            gizmos.line_2d(
                Vec2::new((p0.x * scale) as f32, (p0.y * scale) as f32),
                Vec2::new((p1.x * scale) as f32, (p1.y * scale) as f32),
                color,
            );
        }
    }
}

/// Keep each distance label beside its body; re-render the text only when
/// the cached distance actually changes
fn distance_label_system(
    scenario: Res<Scenario>,
    mut query: Query<(&mut DistanceLabel, &mut Text, &mut Transform)>,
) {
    let scale = scenario.parameters.scale;

    for (mut label, mut text, mut transform) in &mut query {
        let Some(b) = scenario.system.bodies.get(label.body) else {
            continue;
        };

        transform.translation.x = (b.x.x * scale) as f32 + b.radius as f32 + 5.0;
        transform.translation.y = (b.x.y * scale) as f32;

        if b.distance_to_primary != label.last {
            text.sections[0].value = format!("{:e} miles", b.distance_to_primary);
            label.last = b.distance_to_primary;
        }
    }
}

/// Update the elapsed-years counters from the simulation clock
fn year_counter_system(scenario: Res<Scenario>, mut query: Query<(&mut YearCounter, &mut Text)>) {
    let t = scenario.system.t;

    for (mut counter, mut text) in &mut query {
        let Some(b) = scenario.system.bodies.get(counter.body) else {
            continue;
        };
        let years = t / counter.period_secs;

        // Same caching rule as the distance label, but a whole year has to
        // pass before the text regenerates
        if counter.last_year.is_nan() || years.trunc() != counter.last_year.trunc() {
            text.sections[0].value = format!("Years on {}: {:.2}", b.name, years);
            counter.last_year = years;
        }
    }
}
