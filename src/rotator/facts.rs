//! Fact list
//!
//! Static copy shown in the rotating "Did you know?" panel.

pub const PROJECT_FACTS: &[&str] = &[
    "Teams using project management tools are 2.5x more likely to complete projects successfully",
    "Effective project management can reduce project costs by up to 20%",
    "Organizations with mature project management practices waste 13x less money",
    "71% of organizations use project management software to improve team collaboration",
    "Project managers increase team productivity by an average of 30%",
    "Companies with strong project management complete 89% more projects successfully",
];
