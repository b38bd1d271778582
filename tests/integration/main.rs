//! End-to-end tests driving the full plugin with a fixed frame step.

mod scene_transitions;
