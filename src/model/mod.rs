pub mod entity;
pub mod graph;
pub mod presentation;
pub mod transfer;

pub use entity::Entity;
pub use entity::EntityType;
pub use graph::Direction;
pub use graph::DomainGraph;
pub use graph::GraphQuery;
pub use presentation::FlowScene;
pub use presentation::NodeEmphasis;
pub use presentation::Position;
pub use presentation::PresentationEdge;
pub use presentation::PresentationNode;
pub use transfer::TokenInfo;
pub use transfer::TransferEdge;
pub use transfer::TransferKind;
