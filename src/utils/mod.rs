pub mod clock;
pub mod vector3d;
