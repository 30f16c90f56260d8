pub mod milestones;

pub use milestones::{next_milestone, Milestone, TravelStage, UpcomingMilestone};
