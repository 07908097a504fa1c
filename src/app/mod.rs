// Application layer: concrete pipelines wiring storage, config and the core transforms.

pub mod pipelines;
