// src/wizard/steps.rs

//! Step state is never stored: it is derived from the current route path
//! every time it is needed.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WizardStep {
    Assets,
    Parties,
    Assemble,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepDescriptor {
    pub step: WizardStep,
    pub href: &'static str,
    pub name: &'static str,
}

pub const STEPS: [StepDescriptor; 3] = [
    StepDescriptor {
        step: WizardStep::Assets,
        href: "/create-will/assets",
        name: "Declare Assets",
    },
    StepDescriptor {
        step: WizardStep::Parties,
        href: "/create-will/parties",
        name: "Define People",
    },
    StepDescriptor {
        step: WizardStep::Assemble,
        href: "/create-will/assemble",
        name: "Preview and Save",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

/// One row of the stepper, ready to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepView {
    pub number: usize,
    pub name: &'static str,
    pub href: &'static str,
    pub status: StepStatus,
}

impl WizardStep {
    pub fn index(self) -> usize {
        match self {
            WizardStep::Assets => 0,
            WizardStep::Parties => 1,
            WizardStep::Assemble => 2,
        }
    }

    pub fn descriptor(self) -> &'static StepDescriptor {
        &STEPS[self.index()]
    }

    pub fn href(self) -> &'static str {
        self.descriptor().href
    }

    pub fn next(self) -> Option<WizardStep> {
        STEPS.get(self.index() + 1).map(|d| d.step)
    }

    pub fn prev(self) -> Option<WizardStep> {
        self.index().checked_sub(1).map(|i| STEPS[i].step)
    }
}

/// Index of the first step whose href prefixes `path`.
pub fn current_step_index(path: &str) -> Option<usize> {
    STEPS.iter().position(|s| path.starts_with(s.href))
}

pub fn current_step(path: &str) -> Option<WizardStep> {
    current_step_index(path).map(|i| STEPS[i].step)
}

pub fn step_status(current: Option<usize>, index: usize) -> StepStatus {
    match current {
        Some(c) if c > index => StepStatus::Completed,
        Some(c) if c == index => StepStatus::Active,
        _ => StepStatus::Pending,
    }
}

pub fn stepper(path: &str) -> Vec<StepView> {
    let current = current_step_index(path);
    STEPS
        .iter()
        .enumerate()
        .map(|(i, s)| StepView {
            number: i + 1,
            name: s.name,
            href: s.href,
            status: step_status(current, i),
        })
        .collect()
}

// ======================================================
// Unit Tests
// ======================================================
