use crate::animation::values::Interpolatable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMode {
    Linear,
    Step,
    /// glTF layout: every keyframe stores `[in_tangent, value, out_tangent]`.
    CubicSpline,
}

/// How many neighbouring segments the cursor scans before giving up and
/// falling back to a binary search.
const LOCAL_SCAN: usize = 3;

/// Remembers the last sampled segment so monotone playback stays O(1).
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyframeCursor {
    pub last_index: usize,
}

#[derive(Debug, Clone)]
pub struct KeyframeTrack<T: Interpolatable> {
    pub times: Vec<f32>,
    pub values: Vec<T>,
    pub interpolation: InterpolationMode,
}

impl<T: Interpolatable> KeyframeTrack<T> {
    #[must_use]
    pub fn new(times: Vec<f32>, values: Vec<T>, interpolation: InterpolationMode) -> Self {
        Self {
            times,
            values,
            interpolation,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty() || self.values.is_empty()
    }

    /// Time of the last keyframe, or zero for an empty track.
    #[must_use]
    pub fn end_time(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// Stateless sampling. Returns `None` for an empty track.
    #[must_use]
    pub fn sample(&self, time: f32) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let index = self.segment_by_search(time);
        Some(self.sample_segment(index, time))
    }

    /// Samples at `time`, reusing and updating `cursor`.
    pub fn sample_with_cursor(&self, time: f32, cursor: &mut KeyframeCursor) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        if self.times.len() == 1 {
            return Some(self.key_value(0));
        }

        let index = self
            .segment_near(time, cursor.last_index)
            .unwrap_or_else(|| self.segment_by_search(time));
        cursor.last_index = index;

        Some(self.sample_segment(index, time))
    }

    /// Looks for the segment containing `time` within a few steps of `hint`.
    fn segment_near(&self, time: f32, hint: usize) -> Option<usize> {
        let last = self.times.len() - 1;
        let hint = hint.min(last);

        if time >= self.times[hint] {
            for index in hint..=(hint + LOCAL_SCAN).min(last) {
                if index == last || time < self.times[index + 1] {
                    return Some(index);
                }
            }
            None
        } else {
            (hint.saturating_sub(LOCAL_SCAN)..hint)
                .rev()
                .find(|&index| time >= self.times[index])
        }
    }

    fn segment_by_search(&self, time: f32) -> usize {
        self.times
            .partition_point(|&t| t <= time)
            .saturating_sub(1)
    }

    fn key_value(&self, index: usize) -> T {
        match self.interpolation {
            InterpolationMode::CubicSpline => self.values[index * 3 + 1],
            InterpolationMode::Linear | InterpolationMode::Step => self.values[index],
        }
    }

    fn sample_segment(&self, index: usize, time: f32) -> T {
        let last = self.times.len() - 1;
        if index >= last || time <= self.times[0] {
            let clamped = if time <= self.times[0] { 0 } else { last };
            return self.key_value(clamped);
        }

        let next = index + 1;
        let t0 = self.times[index];
        let span = self.times[next] - t0;
        let t = if span > 1e-6 {
            ((time - t0) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };

        match self.interpolation {
            InterpolationMode::Step => self.key_value(index),
            InterpolationMode::Linear => {
                T::interpolate_linear(self.key_value(index), self.key_value(next), t)
            }
            InterpolationMode::CubicSpline => {
                let out_tangent0 = self.values[index * 3 + 2];
                let in_tangent1 = self.values[next * 3];
                T::interpolate_cubic(
                    self.key_value(index),
                    out_tangent0,
                    in_tangent1,
                    self.key_value(next),
                    t,
                    span,
                )
            }
        }
    }
}
