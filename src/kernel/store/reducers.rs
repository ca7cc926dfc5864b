mod file_system;
mod tabs;
