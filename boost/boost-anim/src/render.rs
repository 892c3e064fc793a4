//! Turns a [`Frame`] into canvas primitives for each panel of an animation.

use boost_core::{Label, Model, Scalar};
use boost_frames::{Frame, Segment, Snapshot};

use crate::canvas::{Axis, Canvas, Ink, Weight};
use crate::config::AnimationConfig;
use crate::preset::Animation;

/// Below this speed the velocity annotations are hidden.
const ANNOTATE_MIN_V: Scalar = 0.05;

/// Panels drawn for `animation`, in layout order.
pub fn panels(animation: Animation) -> Vec<Axis> {
    match animation {
        Animation::GalileanSingle => vec![Axis::SPrime],
        Animation::GalileanTwoPanel => vec![Axis::SPrime, Axis::S, Axis::Physical],
        Animation::LorentzTwoPanel => {
            vec![Axis::SPrime, Axis::S, Axis::Snapshot(Label::A), Axis::Snapshot(Label::B)]
        }
    }
}

pub fn render_frame<C>(animation: Animation, frame: &Frame, config: &AnimationConfig, canvas: &mut C)
where
    C: Canvas + ?Sized,
{
    for axis in panels(animation) {
        match axis {
            Axis::SPrime => draw_spacetime(animation, frame, config, canvas),
            Axis::S => draw_rest_view(frame, config, canvas),
            Axis::Physical => draw_physical(frame, config, canvas),
            Axis::Snapshot(label) => draw_snapshot(label, frame, config, canvas),
        }
    }
}

pub fn velocity_label(frame: &Frame) -> String {
    match frame.model {
        Model::Galilean => format!("v = {:.2}c", frame.v.get()),
        Model::Lorentz => format!("v = {:.2}c\nγ = {:.2}", frame.v.get(), frame.gamma),
    }
}

/// Coordinate differences from O to A and B, with s² in both frames under Lorentz.
pub fn interval_readout(frame: &Frame) -> String {
    let o = frame.event(Label::O);
    [Label::A, Label::B]
        .iter()
        .map(|&label| {
            let e = frame.event(label);
            let (dx, dct) = (e.source.0 - o.source.0, e.source.1 - o.source.1);
            let (dxp, dctp) = (e.x - o.x, e.ct - o.ct);
            let mut line = format!(
                "O→{}: Δx={dx}, Δct={dct} → Δx'={dxp:.2}, Δct'={dctp:.2}",
                label.name()
            );
            if frame.model == Model::Lorentz {
                line.push_str(&format!(
                    "\n  s²=Δx²−Δ(ct)²:  S:{:.0}   S':{:.1}",
                    frame.interval_s(Label::O, label),
                    frame.interval_s_prime(Label::O, label)
                ));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn hline(y: Scalar, lo: Scalar, hi: Scalar) -> Segment {
    Segment { from: (lo, y), to: (hi, y) }
}

fn vline(x: Scalar, lo: Scalar, hi: Scalar) -> Segment {
    Segment { from: (x, lo), to: (x, hi) }
}

/// Orthogonal grid of the frame whose coordinates the panel uses.
fn draw_orthogonal_grid<C: Canvas + ?Sized>(axis: Axis, ink: Ink, config: &AnimationConfig, canvas: &mut C) {
    let l = config.spacetime_limit;
    for &val in &config.grid_values {
        canvas.segment(axis, hline(val, -l, l), ink, Weight::Grid);
        canvas.segment(axis, vline(val, -l, l), ink, Weight::Grid);
    }
    canvas.segment(axis, hline(0.0, -l, l), ink, Weight::Axis);
    canvas.segment(axis, vline(0.0, -l, l), ink, Weight::Axis);
}

fn draw_events<C: Canvas + ?Sized>(axis: Axis, frame: &Frame, in_s: bool, canvas: &mut C) {
    for e in &frame.events {
        let at = if in_s { e.source } else { e.coords() };
        canvas.point(axis, at, Ink::Event(e.color), e.label.name());
    }
}

fn draw_spacetime<C: Canvas + ?Sized>(animation: Animation, frame: &Frame, config: &AnimationConfig, canvas: &mut C) {
    let axis = Axis::SPrime;
    let l = config.spacetime_limit;
    canvas.text(axis, (-l, l), animation.title());
    draw_orthogonal_grid(axis, Ink::SPrime, config, canvas);

    for line in frame.grid.time_lines.iter().chain(&frame.grid.space_lines) {
        canvas.segment(axis, line.segment, Ink::S, Weight::Grid);
    }
    canvas.segment(axis, frame.grid.x_axis, Ink::S, Weight::Axis);
    canvas.segment(axis, frame.grid.ct_axis, Ink::S, Weight::Axis);
    canvas.segment(axis, frame.rest_line.segment(), Ink::SPrime, Weight::Axis);

    draw_events(axis, frame, false, canvas);
    canvas.text(axis, (-l, -0.7 * l), &interval_readout(frame));
    canvas.text(axis, (l, -l), &velocity_label(frame));
    canvas.text(axis, (-l, 0.9 * l), "S' coordinates (x', ct')\nS coordinates (x, ct)");
}

/// The same events seen from S, with the S′ line of simultaneity.
fn draw_rest_view<C: Canvas + ?Sized>(frame: &Frame, config: &AnimationConfig, canvas: &mut C) {
    let axis = Axis::S;
    let l = config.spacetime_limit;
    canvas.text(axis, (-l, l), "Spacetime Diagram (S Frame)");
    draw_orthogonal_grid(axis, Ink::S, config, canvas);
    canvas.segment(axis, frame.boosted_line.segment(), Ink::SPrime, Weight::Axis);
    draw_events(axis, frame, true, canvas);
    canvas.text(axis, (l, -l), &format!("S' simultaneity: slope {:.2}", frame.boosted_line.slope));
}

/// Common part of the physical-space panels: both rulers and the velocity arrow.
fn draw_rulers<C: Canvas + ?Sized>(axis: Axis, snap: &Snapshot, frame: &Frame, config: &AnimationConfig, canvas: &mut C) {
    let (x0, x1) = config.spatial_xlim;
    let (y0, y1) = config.spatial_ylim;
    let inside = |x: Scalar, margin: Scalar| x0 + margin < x && x < x1 - margin;

    canvas.segment(axis, hline(0.0, x0, x1), Ink::SPrime, Weight::Axis);
    canvas.segment(axis, vline(0.0, y0, y1), Ink::SPrime, Weight::Axis);
    for tick in (x0.ceil() as i32)..=(x1.floor() as i32) {
        let t = tick as Scalar;
        if tick != 0 && inside(t, 0.2) {
            canvas.segment(axis, vline(t, -0.08, 0.08), Ink::SPrime, Weight::Tick);
        }
    }
    canvas.text(axis, (0.12, -0.45), "O'");

    // S x axis sits slightly above y = 0 so both stay visible when the frames coincide
    canvas.segment(axis, hline(0.03, x0, x1), Ink::S, Weight::Axis);
    if inside(snap.s_origin, 0.0) {
        canvas.segment(axis, vline(snap.s_origin, y0, y1), Ink::S, Weight::Axis);
    }
    for n in -8..=8 {
        let pos = snap.tick(n);
        if inside(pos, 0.2) {
            canvas.segment(axis, vline(pos, -0.05, 0.11), Ink::S, Weight::Tick);
            canvas.text(axis, (pos, 0.25), &n.to_string());
        }
    }

    let v = frame.v.get();
    if v.abs() > ANNOTATE_MIN_V {
        if inside(snap.s_origin, 0.3) && snap.s_origin.abs() > 0.3 {
            canvas.text(axis, (snap.s_origin + 0.12, -0.45), "O");
        }
        match frame.model {
            Model::Galilean => {
                let y = -1.2;
                canvas.segment(axis, hline(y, 0.0, snap.s_origin), Ink::Note, Weight::Axis);
                canvas.text(axis, (snap.s_origin / 2.0, y - 0.35), &format!("v = {v:.2}c"));
            }
            Model::Lorentz => {
                let y = y0 + 0.6;
                canvas.segment(axis, Segment { from: (0.8, y), to: (-0.8, y) }, Ink::Note, Weight::Axis);
                canvas.text(axis, (0.0, y - 0.35), &format!("S moves at −{v:.2}c"));
            }
        }
    }
}

/// Galilean physical space at the time of B; one snapshot serves every event.
fn draw_physical<C: Canvas + ?Sized>(frame: &Frame, config: &AnimationConfig, canvas: &mut C) {
    let axis = Axis::Physical;
    let snap = frame.snapshot(Label::B);
    canvas.text(axis, (config.spatial_xlim.0, config.spatial_ylim.1), "Physical Space (S' Frame)");
    draw_rulers(axis, &snap, frame, config, canvas);
    for label in [Label::A, Label::B] {
        let e = frame.event(label);
        canvas.point(axis, (e.x, 0.0), Ink::Event(e.color), label.name());
    }
}

fn draw_snapshot<C: Canvas + ?Sized>(label: Label, frame: &Frame, config: &AnimationConfig, canvas: &mut C) {
    let axis = Axis::Snapshot(label);
    let snap = frame.snapshot(label);
    let (x0, x1) = config.spatial_xlim;
    let e = frame.event(label);

    canvas.text(
        axis,
        (x0, config.spatial_ylim.1),
        &format!("Event {}:  snapshot at ct' = {:.2}", label.name(), snap.ct),
    );
    draw_rulers(axis, &snap, frame, config, canvas);
    if x0 < snap.x && snap.x < x1 {
        canvas.point(axis, (snap.x, 0.0), Ink::Event(e.color), label.name());
    }

    if frame.v.get().abs() <= ANNOTATE_MIN_V {
        return;
    }
    match label {
        Label::A => {
            let inside = |x: Scalar| x0 + 0.2 < x && x < x1 - 0.2;
            if inside(snap.s_origin) && inside(snap.x) && snap.separation() > 0.1 {
                let y = -0.8;
                canvas.segment(axis, hline(y, snap.s_origin, snap.x), Ink::Event(e.color), Weight::Axis);
                canvas.text(
                    axis,
                    ((snap.x + snap.s_origin) / 2.0, y - 0.35),
                    &format!("Δx' = 1/γ = {:.2}", snap.tick_spacing),
                );
            }
        }
        Label::B => {
            canvas.text(
                axis,
                (x1, config.spatial_ylim.1),
                &format!("S clock:  ct = 1\nS' clock: ct' = γ = {:.2}", frame.gamma),
            );
        }
        Label::O => {}
    }
}
