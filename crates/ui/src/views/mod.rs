mod icon;
mod step_card;
mod summary;
mod tutorial;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use icon::Icon;
pub use tutorial::TutorialView;
