//! Sequential export job queue.
//!
//! Shot generation used to be scheduled by chaining "do the next one
//! after a delay" timers that read ambient settings. Here ordering and
//! configuration are explicit inputs instead: frames are enqueued in
//! board order, at most `max_in_flight` jobs are handed out at a time,
//! always earliest-pending first, and the caller reports completion or
//! failure. No timers, no ambient state, fully deterministic.

use log::debug;
use storymark_core::{Frame, FrameId, ProjectConfig};

/// Lifecycle of one export job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Pending,
    InFlight,
    Done,
    Failed,
}

/// One frame's export job.
#[derive(Debug, Clone)]
pub struct ExportJob {
    pub frame_id: FrameId,
    pub shot_number: u32,
    pub state: JobState,
}

/// Ordered queue of export jobs with bounded concurrency.
#[derive(Debug)]
pub struct ExportQueue {
    jobs: Vec<ExportJob>,
    max_in_flight: usize,
    /// Settings snapshot the jobs run against, fixed at queue creation.
    project: ProjectConfig,
}

impl ExportQueue {
    /// Build a queue over the frames in their board order.
    /// `max_in_flight` is raised to 1 if 0 is passed.
    pub fn new(frames: &[Frame], project: ProjectConfig, max_in_flight: usize) -> Self {
        let jobs = frames
            .iter()
            .map(|f| ExportJob {
                frame_id: f.id,
                shot_number: f.number,
                state: JobState::Pending,
            })
            .collect();
        Self {
            jobs,
            max_in_flight: max_in_flight.max(1),
            project,
        }
    }

    /// The configuration snapshot jobs run against.
    pub fn project(&self) -> &ProjectConfig {
        &self.project
    }

    /// Hand out the next job: the earliest pending one, provided the
    /// in-flight bound allows it. Returns `None` when everything is
    /// in flight, done, or failed.
    pub fn start_next(&mut self) -> Option<FrameId> {
        if self.in_flight() >= self.max_in_flight {
            return None;
        }
        let job = self.jobs.iter_mut().find(|j| j.state == JobState::Pending)?;
        job.state = JobState::InFlight;
        debug!("export: shot {} started", job.shot_number);
        Some(job.frame_id)
    }

    /// Mark an in-flight job done. Returns false if the id is unknown
    /// or not in flight.
    pub fn complete(&mut self, id: FrameId) -> bool {
        self.transition(id, JobState::Done)
    }

    /// Mark an in-flight job failed. Returns false if the id is unknown
    /// or not in flight.
    pub fn fail(&mut self, id: FrameId) -> bool {
        self.transition(id, JobState::Failed)
    }

    fn transition(&mut self, id: FrameId, to: JobState) -> bool {
        match self
            .jobs
            .iter_mut()
            .find(|j| j.frame_id == id && j.state == JobState::InFlight)
        {
            Some(job) => {
                debug!("export: shot {} -> {:?}", job.shot_number, to);
                job.state = to;
                true
            }
            None => false,
        }
    }

    pub fn in_flight(&self) -> usize {
        self.jobs.iter().filter(|j| j.state == JobState::InFlight).count()
    }

    /// True once no job is pending or in flight.
    pub fn is_finished(&self) -> bool {
        self.jobs
            .iter()
            .all(|j| matches!(j.state, JobState::Done | JobState::Failed))
    }

    pub fn jobs(&self) -> &[ExportJob] {
        &self.jobs
    }
}
