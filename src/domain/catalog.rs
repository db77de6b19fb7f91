pub const INDUSTRIES: &[&str] = &[
    "Law Firm",
    "Dental Clinic",
    "Orthodontist",
    "Physiotherapy Clinic",
    "Chiropractor",
    "Med Spa",
    "Roofing Company",
    "HVAC Company",
    "Plumber",
    "Electrician",
    "Landscaping Company",
    "Pest Control Service",
    "Home Renovation Contractor",
    "Accounting Firm",
    "Real Estate Agency",
    "Auto Repair Shop",
    "Cleaning Service",
    "IT Support Company",
];

pub const CITIES: &[&str] = &[
    "Toronto, ON",
    "Mississauga, ON",
    "Brampton, ON",
    "Markham, ON",
    "Vaughan, ON",
    "Hamilton, ON",
    "London, ON",
    "Kitchener, ON",
    "Waterloo, ON",
    "Guelph, ON",
    "Oakville, ON",
    "Burlington, ON",
    "Milton, ON",
    "Ottawa, ON",
    "Montreal, QC",
    "Quebec City, QC",
    "Laval, QC",
    "Vancouver, BC",
    "Surrey, BC",
    "Burnaby, BC",
    "Richmond, BC",
    "Victoria, BC",
    "Kelowna, BC",
    "Calgary, AB",
    "Edmonton, AB",
    "Red Deer, AB",
    "Winnipeg, MB",
    "Regina, SK",
    "Saskatoon, SK",
    "Halifax, NS",
    "Moncton, NB",
    "Fredericton, NB",
    "Charlottetown, PE",
    "St. John’s, NL",
];
