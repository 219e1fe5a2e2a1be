use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

use super::geometry::{
    EPSILON, midpoint, ndc_delta, ordered_pair, pair_angle, pair_distance, wrap_angle, world_delta,
};
use super::state::{GestureState, PairBaseline, PairGesture};
use super::viewport::Viewport;
use crate::model::{GestureSettings, PointerSample, SinglePointerMode, TargetTransform, TransformDelta};

/// Result of one pointer-move frame. `transform` already has `delta` applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureUpdate {
    pub delta: TransformDelta,
    pub transform: TargetTransform,
    pub state: GestureState,
}

impl GestureUpdate {
    fn unchanged(state: GestureState, current: &TargetTransform) -> Self {
        Self {
            delta: TransformDelta::NONE,
            transform: *current,
            state,
        }
    }

    fn changed(state: GestureState, before: &TargetTransform, after: TargetTransform) -> Self {
        let scale = if before.scale.abs() > EPSILON {
            after.scale / before.scale
        } else {
            1.0
        };
        Self {
            delta: TransformDelta {
                translation: after.position - before.position,
                rotation: after.rotation - before.rotation,
                scale,
            },
            transform: after,
            state,
        }
    }
}

/// Turns pointer lifecycle events into transform updates.
///
/// Holds no gesture state of its own: callers keep the returned
/// [`GestureState`] and hand it back on the next event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureInterpreter {
    settings: GestureSettings,
}

impl GestureInterpreter {
    pub fn new(settings: GestureSettings) -> Self {
        Self {
            settings: settings.sanitized(),
        }
    }

    pub fn settings(&self) -> &GestureSettings {
        &self.settings
    }

    /// Starts (or restarts) a gesture from the full set of live pointers.
    pub fn pointers_down(&self, pointers: &[PointerSample], current: &TargetTransform) -> GestureState {
        let next = self.capture(pointers, current);
        log::debug!(
            "gesture down: {} pointer(s) -> {} (baseline distance {:?})",
            pointers.len(),
            next.mode().label(),
            next.baseline_distance()
        );
        next
    }

    pub fn pointers_move(
        &self,
        pointers: &[PointerSample],
        state: &GestureState,
        current: &TargetTransform,
        viewport: &impl Viewport,
    ) -> GestureUpdate {
        if pointers.len() != state.mode().pointer_count() {
            if !state.is_idle() {
                log::trace!(
                    "ignoring move: {} pointer(s) in {} mode",
                    pointers.len(),
                    state.mode().label()
                );
            }
            return GestureUpdate::unchanged(*state, current);
        }
        match *state {
            GestureState::Idle => GestureUpdate::unchanged(*state, current),
            GestureState::Move { pointer, anchor } => {
                self.drag(pointers[0], pointer, anchor, state, current, viewport)
            }
            GestureState::Rotate {
                pointer,
                anchor,
                baseline_rotation,
            } => self.orbit(pointers[0], pointer, anchor, baseline_rotation, state, current, viewport),
            GestureState::ScaleRotate(pair) => self.pinch(pointers, &pair, state, current, viewport),
        }
    }

    /// Re-derives the gesture from whatever pointers are still down.
    pub fn pointers_up(
        &self,
        remaining: &[PointerSample],
        state: &GestureState,
        current: &TargetTransform,
    ) -> GestureState {
        let next = self.capture(remaining, current);
        log::debug!(
            "gesture up: {} -> {} ({} pointer(s) left)",
            state.mode().label(),
            next.mode().label(),
            remaining.len()
        );
        next
    }

    fn capture(&self, pointers: &[PointerSample], current: &TargetTransform) -> GestureState {
        match pointers {
            [p] => match self.settings.single_pointer {
                SinglePointerMode::Move => GestureState::Move {
                    pointer: p.id,
                    anchor: p.pos(),
                },
                SinglePointerMode::Rotate => GestureState::Rotate {
                    pointer: p.id,
                    anchor: p.pos(),
                    baseline_rotation: current.rotation,
                },
            },
            [_, _] => match ordered_pair(pointers) {
                Some((a, b)) => {
                    let pair = self.pair_baseline(a, b);
                    if pair.is_none() {
                        log::trace!("pointers {} and {} coincide, deferring baseline", a.id, b.id);
                    }
                    GestureState::ScaleRotate(PairGesture {
                        ids: (a.id, b.id),
                        anchor: midpoint(a.pos(), b.pos()),
                        baseline_scale: current.scale,
                        baseline_rotation: current.rotation,
                        baseline: pair,
                    })
                }
                None => GestureState::Idle,
            },
            _ => GestureState::Idle,
        }
    }

    fn pair_baseline(&self, a: PointerSample, b: PointerSample) -> Option<PairBaseline> {
        let distance = pair_distance(a.pos(), b.pos(), self.settings.distance_metric);
        (distance > EPSILON).then(|| PairBaseline {
            distance,
            angle: pair_angle(a.pos(), b.pos()),
            twist: 0.0,
        })
    }

    fn screen_translation(
        &self,
        pixels: Vec2,
        current: &TargetTransform,
        viewport: &impl Viewport,
    ) -> Option<Vec3> {
        let ndc = ndc_delta(pixels, viewport.size())?;
        Some(world_delta(viewport, ndc, current.position))
    }

    fn drag(
        &self,
        p: PointerSample,
        pointer: i32,
        anchor: Vec2,
        state: &GestureState,
        current: &TargetTransform,
        viewport: &impl Viewport,
    ) -> GestureUpdate {
        if p.id != pointer {
            return GestureUpdate::unchanged(*state, current);
        }
        let Some(translation) = self.screen_translation(p.pos() - anchor, current, viewport) else {
            return GestureUpdate::unchanged(*state, current);
        };
        let delta = TransformDelta {
            translation,
            ..TransformDelta::NONE
        };
        GestureUpdate {
            delta,
            transform: delta.apply(current),
            state: GestureState::Move {
                pointer,
                anchor: p.pos(),
            },
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn orbit(
        &self,
        p: PointerSample,
        pointer: i32,
        anchor: Vec2,
        baseline_rotation: f32,
        state: &GestureState,
        current: &TargetTransform,
        viewport: &impl Viewport,
    ) -> GestureUpdate {
        let width = viewport.size().x;
        if p.id != pointer || width <= EPSILON {
            return GestureUpdate::unchanged(*state, current);
        }
        let angle = (p.x - anchor.x) / width * TAU * self.settings.rotate_sensitivity;
        let rotation = baseline_rotation - angle;
        let after = TargetTransform {
            rotation,
            ..*current
        };
        let next = GestureState::Rotate {
            pointer,
            anchor: p.pos(),
            baseline_rotation: rotation,
        };
        GestureUpdate::changed(next, current, after)
    }

    fn pinch(
        &self,
        pointers: &[PointerSample],
        pair: &PairGesture,
        state: &GestureState,
        current: &TargetTransform,
        viewport: &impl Viewport,
    ) -> GestureUpdate {
        let Some((a, b)) = ordered_pair(pointers) else {
            return GestureUpdate::unchanged(*state, current);
        };
        if (a.id, b.id) != pair.ids {
            log::trace!("ignoring move: pointer ids changed mid-pinch");
            return GestureUpdate::unchanged(*state, current);
        }
        let mid = midpoint(a.pos(), b.pos());

        let Some(baseline) = pair.baseline else {
            // Deferred start: capture everything from this frame, move nothing.
            return match self.pair_baseline(a, b) {
                Some(baseline) => {
                    let next = GestureState::ScaleRotate(PairGesture {
                        anchor: mid,
                        baseline_scale: current.scale,
                        baseline_rotation: current.rotation,
                        baseline: Some(baseline),
                        ..*pair
                    });
                    GestureUpdate::unchanged(next, current)
                }
                None => GestureUpdate::unchanged(*state, current),
            };
        };

        let distance = pair_distance(a.pos(), b.pos(), self.settings.distance_metric);
        if distance <= EPSILON {
            log::trace!("pointers coincide, skipping frame");
            return GestureUpdate::unchanged(*state, current);
        }
        let scale = pair.baseline_scale * (distance / baseline.distance);
        let angle = pair_angle(a.pos(), b.pos());
        let twist = baseline.twist + wrap_angle(angle - baseline.angle);
        let rotation = pair.baseline_rotation - twist;

        let translation = if self.settings.pinch_translate {
            self.screen_translation(mid - pair.anchor, current, viewport)
                .map(|t| t * self.settings.pinch_translate_sensitivity)
                .unwrap_or(Vec3::ZERO)
        } else {
            Vec3::ZERO
        };

        let after = TargetTransform {
            position: current.position + translation,
            rotation,
            scale,
        };
        let next = GestureState::ScaleRotate(PairGesture {
            anchor: mid,
            baseline: Some(PairBaseline {
                angle,
                twist,
                ..baseline
            }),
            ..*pair
        });
        GestureUpdate::changed(next, current, after)
    }
}
