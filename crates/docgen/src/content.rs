//! Per-industry content template tables for synthetic documents.
//!
//! Each template provides page headers, labelled form fields, boilerplate
//! paragraphs, and a small summary table. Unknown industries fall back to
//! the healthcare template.

pub struct ContentTemplate {
    pub headers: &'static [&'static str],
    pub fields: &'static [(&'static str, &'static str)],
    pub paragraphs: &'static [&'static str],
    pub table_headers: &'static [&'static str],
    pub table_rows: &'static [&'static [&'static str]],
}

/// Lorem ipsum filler paragraphs, shared across industries.
pub const LOREM_IPSUM: &[&str] = &[
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.",
    "Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.",
    "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur.",
    "Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.",
    "Sed ut perspiciatis unde omnis iste natus error sit voluptatem accusantium doloremque laudantium.",
    "Nemo enim ipsam voluptatem quia voluptas sit aspernatur aut odit aut fugit, sed quia consequuntur magni dolores.",
    "Neque porro quisquam est, qui dolorem ipsum quia dolor sit amet, consectetur, adipisci velit.",
    "Ut enim ad minima veniam, quis nostrum exercitationem ullam corporis suscipit laboriosam.",
];

const HEALTHCARE: ContentTemplate = ContentTemplate {
    headers: &[
        "PATIENT INFORMATION FORM",
        "MEDICAL RECORD",
        "CLINICAL REPORT",
        "HEALTHCARE DOCUMENT",
        "PATIENT CHART",
        "MEDICAL SUMMARY",
    ],
    fields: &[
        ("Patient Name", "________________________________"),
        ("Date of Birth", "____ / ____ / ________"),
        ("Medical Record #", "MRN-______________"),
        ("Attending Physician", "Dr. ________________"),
        ("Department", "________________________________"),
        ("Insurance Provider", "________________________________"),
        ("Policy Number", "________________________________"),
        ("Primary Diagnosis", "________________________________"),
        ("Date of Service", "____ / ____ / ________"),
    ],
    paragraphs: &[
        "This document contains protected health information (PHI) as defined by HIPAA regulations. Unauthorized disclosure is prohibited.",
        "Patient presented with symptoms consistent with the documented diagnosis. Physical examination was performed and findings are recorded below.",
        "Treatment plan has been discussed with patient and/or authorized representative. Informed consent obtained for all procedures.",
        "Vital signs within normal limits unless otherwise noted. Patient tolerated procedure well with no immediate complications.",
        "Follow-up appointment scheduled. Patient instructed on medication regimen, potential side effects, and warning signs requiring immediate attention.",
        "Laboratory results have been reviewed and are consistent with clinical presentation. Further testing may be indicated based on response to treatment.",
        "Medication reconciliation completed. Current medications verified with patient and updated in electronic health record.",
        "Discharge instructions provided to patient. Patient verbalized understanding of care plan and follow-up requirements.",
    ],
    table_headers: &["Date", "Procedure", "Provider", "Notes"],
    table_rows: &[
        &["12/01/2024", "Initial Consultation", "Dr. Smith", "Complete"],
        &["12/02/2024", "Laboratory Work", "Lab Tech", "Results Pending"],
        &["12/03/2024", "Follow-up Visit", "Dr. Johnson", "Scheduled"],
    ],
};

const MANUFACTURING: ContentTemplate = ContentTemplate {
    headers: &[
        "PRODUCTION DOCUMENT",
        "QUALITY CONTROL REPORT",
        "WORK ORDER",
        "MANUFACTURING RECORD",
        "INSPECTION REPORT",
        "OPERATIONS LOG",
    ],
    fields: &[
        ("Work Order #", "WO-______________"),
        ("Part Number", "PN-______________"),
        ("Batch/Lot #", "LOT-______________"),
        ("Production Date", "____ / ____ / ________"),
        ("Operator ID", "________________________________"),
        ("Machine/Line", "________________________________"),
        ("Quantity Produced", "________________________________"),
        ("Quality Inspector", "________________________________"),
        ("Shift", "[ ] Day  [ ] Swing  [ ] Night"),
    ],
    paragraphs: &[
        "This document serves as the official production record for the referenced work order. All entries must be made in permanent ink.",
        "Quality inspection completed per standard operating procedures. All measurements within specified tolerances unless noted.",
        "Raw materials verified against bill of materials. Material lot numbers recorded for traceability purposes.",
        "Equipment calibration verified prior to production run. Calibration certificates on file in quality assurance department.",
        "Production parameters monitored throughout run. Any deviations from standard process documented in remarks section.",
        "Finished goods inspection completed. Product meets all quality specifications and is approved for release to inventory.",
        "Non-conforming material identified and segregated. Disposition pending review by quality engineering team.",
        "Preventive maintenance completed as scheduled. Equipment returned to production-ready status.",
    ],
    table_headers: &["Step", "Operation", "Time", "Status"],
    table_rows: &[
        &["1", "Material Prep", "08:00", "Complete"],
        &["2", "Assembly", "09:30", "Complete"],
        &["3", "Quality Check", "11:00", "In Progress"],
        &["4", "Packaging", "13:00", "Pending"],
    ],
};

const LEGAL: ContentTemplate = ContentTemplate {
    headers: &[
        "LEGAL DOCUMENT",
        "CONFIDENTIAL MEMORANDUM",
        "CASE FILE",
        "ATTORNEY WORK PRODUCT",
        "PRIVILEGED COMMUNICATION",
        "LEGAL BRIEF",
    ],
    fields: &[
        ("Case Number", "________________________________"),
        ("Matter Name", "________________________________"),
        ("Client Name", "________________________________"),
        ("Responsible Attorney", "________________________________"),
        ("Date Filed", "____ / ____ / ________"),
        ("Court/Jurisdiction", "________________________________"),
        ("Opposing Counsel", "________________________________"),
        ("Document Type", "________________________________"),
        ("Confidentiality", "[ ] Public  [ ] Confidential  [ ] Privileged"),
    ],
    paragraphs: &[
        "ATTORNEY-CLIENT PRIVILEGED AND CONFIDENTIAL. This document is protected by attorney-client privilege and/or work product doctrine.",
        "This memorandum summarizes the relevant legal issues and provides analysis based on applicable statutes and case law.",
        "The facts presented herein are based on information provided by the client and documentation reviewed to date.",
        "Legal research has been conducted regarding the applicable jurisdiction's treatment of the issues presented.",
        "Based on our analysis, we recommend the following course of action, subject to further developments in the matter.",
        "Discovery requests have been prepared and are ready for service upon opposing counsel pending client approval.",
        "Settlement negotiations remain ongoing. The opposing party has indicated willingness to discuss resolution.",
        "Court deadlines and statute of limitations dates have been calendared. All filings are current.",
    ],
    table_headers: &["Date", "Event", "Deadline", "Status"],
    table_rows: &[
        &["12/15/2024", "Discovery Due", "01/15/2025", "In Progress"],
        &["01/20/2025", "Motion Hearing", "01/20/2025", "Scheduled"],
        &["02/01/2025", "Trial Date", "02/01/2025", "Confirmed"],
    ],
};

const FINANCE: ContentTemplate = ContentTemplate {
    headers: &[
        "FINANCIAL REPORT",
        "ACCOUNT STATEMENT",
        "FISCAL DOCUMENT",
        "FINANCIAL SUMMARY",
        "BUDGET REPORT",
        "ACCOUNTING RECORD",
    ],
    fields: &[
        ("Account Number", "________________________________"),
        ("Report Period", "____ / ____ / ________ to ____ / ____ / ________"),
        ("Prepared By", "________________________________"),
        ("Department", "________________________________"),
        ("Cost Center", "________________________________"),
        ("Approval Status", "[ ] Draft  [ ] Reviewed  [ ] Approved"),
        ("Report Date", "____ / ____ / ________"),
        ("Currency", "________________________________"),
        ("Fiscal Year", "FY __________"),
    ],
    paragraphs: &[
        "This financial report has been prepared in accordance with generally accepted accounting principles (GAAP).",
        "All figures presented are subject to final audit adjustments. Preliminary numbers may vary from audited statements.",
        "Revenue recognition follows the accrual method of accounting. Expenses are matched to the period in which they are incurred.",
        "Budget variances exceeding 10% have been reviewed with department managers. Explanations are provided in the notes section.",
        "Cash flow projections are based on historical patterns and known upcoming obligations.",
        "Accounts receivable aging analysis indicates collection efforts are proceeding within normal parameters.",
        "Capital expenditure requests have been evaluated against available budget and strategic priorities.",
        "Internal controls have been tested and are operating effectively. No material weaknesses identified.",
    ],
    table_headers: &["Category", "Budget", "Actual", "Variance"],
    table_rows: &[
        &["Revenue", "$500,000", "$485,000", "($15,000)"],
        &["Expenses", "$350,000", "$340,000", "$10,000"],
        &["Net Income", "$150,000", "$145,000", "($5,000)"],
    ],
};

const EDUCATION: ContentTemplate = ContentTemplate {
    headers: &[
        "ACADEMIC DOCUMENT",
        "STUDENT RECORD",
        "EDUCATIONAL REPORT",
        "SCHOOL DOCUMENT",
        "ACADEMIC RECORD",
        "ENROLLMENT FORM",
    ],
    fields: &[
        ("Student Name", "________________________________"),
        ("Student ID", "________________________________"),
        ("Grade Level", "________________________________"),
        ("School Year", "20____ - 20____"),
        ("Teacher/Instructor", "________________________________"),
        ("Course/Subject", "________________________________"),
        ("Parent/Guardian", "________________________________"),
        ("Emergency Contact", "________________________________"),
        ("Date", "____ / ____ / ________"),
    ],
    paragraphs: &[
        "This document is part of the official student record and is protected under FERPA regulations.",
        "Academic performance has been evaluated based on established curriculum standards and learning objectives.",
        "Student demonstrates consistent effort and engagement in classroom activities and assignments.",
        "Areas for improvement have been identified and discussed with student and parent/guardian as appropriate.",
        "Standardized assessment results are included in the supplementary materials section of this report.",
        "Attendance records indicate the student has met minimum requirements for course credit.",
        "Recommendations for academic support services have been made based on observed needs.",
        "Parent/guardian conference scheduled to discuss student progress and educational goals.",
    ],
    table_headers: &["Subject", "Grade", "Credits", "Status"],
    table_rows: &[
        &["Mathematics", "B+", "3.0", "Complete"],
        &["English", "A-", "3.0", "Complete"],
        &["Science", "B", "3.0", "In Progress"],
        &["History", "A", "3.0", "Complete"],
    ],
};

/// Content template for an industry. Unknown industries use healthcare.
pub fn template_for(industry: &str) -> &'static ContentTemplate {
    match industry {
        "manufacturing" => &MANUFACTURING,
        "legal" => &LEGAL,
        "finance" => &FINANCE,
        "education" => &EDUCATION,
        _ => &HEALTHCARE,
    }
}
