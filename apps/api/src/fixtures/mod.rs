//! Synthetic job postings and candidate pools. These stand in for the live feed and
//! for the candidate database the service would otherwise sit next to.

pub mod candidates;
pub mod jobs;

pub const BASE_TITLES: &[&str] = &[
    "General Labor",
    "Warehouse Associate",
    "Forklift Operator",
    "Order Picker",
    "Assembly Line Worker",
    "Machine Operator",
    "CNC Machinist",
    "Production Lead",
    "Shipping & Receiving Clerk",
    "Quality Inspector",
    "Medical Assembler",
    "Administrative Assistant",
    "Customer Service Rep",
    "Maintenance Technician",
    "Human Resources Coordinator",
    "Recruiter",
    "Account Manager",
    "Data Entry Specialist",
];

pub const MN_LOCATIONS: &[&str] = &[
    "Minneapolis, MN",
    "St. Paul, MN",
    "Bloomington, MN",
    "Brooklyn Park, MN",
    "Plymouth, MN",
    "Maple Grove, MN",
    "Woodbury, MN",
    "Eagan, MN",
    "Eden Prairie, MN",
    "Coon Rapids, MN",
    "Burnsville, MN",
    "Blaine, MN",
    "Rochester, MN",
    "Duluth, MN",
    "St. Cloud, MN",
    "Mankato, MN",
];
