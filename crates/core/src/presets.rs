//! Static per-industry filename preset catalogs.
//!
//! Sample document names offered to the operator when configuring a
//! session. Purely a labeling/content-selection axis; the catalogs carry
//! no behavior.

/// Industry names with a preset catalog, in display order.
pub const INDUSTRIES: &[&str] = &[
    "healthcare",
    "manufacturing",
    "legal",
    "finance",
    "education",
];

pub const HEALTHCARE_FILENAMES: &[&str] = &[
    "Patient_Discharge_Summary.pdf",
    "Lab_Results_Report.pdf",
    "Insurance_Claim_Form.pdf",
    "Prescription_Order.pdf",
    "Medical_History_Record.pdf",
    "Radiology_Report.pdf",
    "Surgical_Consent_Form.pdf",
    "Patient_Intake_Form.pdf",
    "HIPAA_Authorization.pdf",
    "Immunization_Record.pdf",
    "Blood_Work_Results.pdf",
    "Referral_Request.pdf",
    "Treatment_Plan.pdf",
    "Physical_Therapy_Notes.pdf",
    "Nursing_Assessment.pdf",
    "Medication_List.pdf",
    "Allergy_Report.pdf",
    "Emergency_Contact_Form.pdf",
    "Insurance_Verification.pdf",
    "Appointment_Summary.pdf",
];

pub const MANUFACTURING_FILENAMES: &[&str] = &[
    "Work_Order_WO2024.pdf",
    "Quality_Inspection_Report.pdf",
    "Shipping_Manifest.pdf",
    "Bill_of_Materials.pdf",
    "Production_Schedule.pdf",
    "Inventory_Report.pdf",
    "Equipment_Maintenance_Log.pdf",
    "Safety_Checklist.pdf",
    "Packing_Slip.pdf",
    "Purchase_Order.pdf",
    "Vendor_Invoice.pdf",
    "Material_Requisition.pdf",
    "Assembly_Instructions.pdf",
    "Quality_Control_Checklist.pdf",
    "Batch_Record.pdf",
    "Calibration_Certificate.pdf",
    "Non_Conformance_Report.pdf",
    "Corrective_Action_Request.pdf",
    "Engineering_Change_Order.pdf",
    "Production_Report.pdf",
];

pub const LEGAL_FILENAMES: &[&str] = &[
    "Contract_Agreement.pdf",
    "Legal_Brief.pdf",
    "Court_Filing.pdf",
    "Deposition_Transcript.pdf",
    "Settlement_Agreement.pdf",
    "Power_of_Attorney.pdf",
    "Affidavit.pdf",
    "Subpoena.pdf",
    "Discovery_Request.pdf",
    "Motion_to_Dismiss.pdf",
    "Client_Engagement_Letter.pdf",
    "Case_Summary.pdf",
    "Witness_Statement.pdf",
    "Evidence_Exhibit.pdf",
    "Legal_Opinion.pdf",
];

pub const FINANCE_FILENAMES: &[&str] = &[
    "Quarterly_Report.pdf",
    "Annual_Statement.pdf",
    "Invoice.pdf",
    "Account_Reconciliation.pdf",
    "Budget_Proposal.pdf",
    "Expense_Report.pdf",
    "Tax_Filing.pdf",
    "Audit_Report.pdf",
    "Financial_Forecast.pdf",
    "Investment_Summary.pdf",
    "Loan_Application.pdf",
    "Credit_Report.pdf",
    "Bank_Statement.pdf",
    "Portfolio_Analysis.pdf",
    "Risk_Assessment.pdf",
];

pub const EDUCATION_FILENAMES: &[&str] = &[
    "Student_Transcript.pdf",
    "Report_Card.pdf",
    "Course_Syllabus.pdf",
    "Enrollment_Form.pdf",
    "Financial_Aid_Application.pdf",
    "Recommendation_Letter.pdf",
    "Graduation_Certificate.pdf",
    "Class_Schedule.pdf",
    "Attendance_Report.pdf",
    "Academic_Calendar.pdf",
    "Parent_Permission_Slip.pdf",
    "IEP_Document.pdf",
    "Test_Results.pdf",
    "Library_Checkout.pdf",
    "Student_Handbook.pdf",
];

/// Filename preset catalog for an industry, if one exists.
pub fn filenames_for(industry: &str) -> Option<&'static [&'static str]> {
    match industry {
        "healthcare" => Some(HEALTHCARE_FILENAMES),
        "manufacturing" => Some(MANUFACTURING_FILENAMES),
        "legal" => Some(LEGAL_FILENAMES),
        "finance" => Some(FINANCE_FILENAMES),
        "education" => Some(EDUCATION_FILENAMES),
        _ => None,
    }
}
