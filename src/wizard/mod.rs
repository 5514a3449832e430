// src/wizard/mod.rs

pub mod seal;
pub mod steps;

pub use seal::{
    build_create_will_call, check_seal_preconditions, instruction_lines, resolve_lawyer,
    LawyerFallback, SealRequirement, ValidationError, SIGNATURE_PROVIDER_PLACEHOLDER,
    WILL_SIGNATURE_PLACEHOLDER,
};
pub use steps::{
    current_step, current_step_index, step_status, stepper, StepDescriptor, StepStatus, StepView,
    WizardStep, STEPS,
};
