/// Instruction sent alongside the receipt photo on every extraction attempt.
pub const EXTRACTION_PROMPT: &str = r#"Read the attached receipt image and return its information in JSON format.
Return only a single JSON object.
If you cannot find a piece of information, leave the field empty or return an empty object. Never invent values.
Do not add any text before or after the JSON.

Output format:
{
    "date": "DDMMYYYY",
    "total_amount": 0.0,
    "items": [
        {
            "name": "Item Name",
            "quantity": 0,
            "price": 0.0,
            "category": "Item Category",
            "sub_category": "Item Sub Category",
            "is_healthy": true,
            "is_organic": true,
            "is_local": true,
            "is_sustainable": true
        }
    ],
    "tax": 0.0,
    "tip": 0.0,
    "store_name": "Store Name",
    "address": "Address",
    "phone_number": "Phone Number",
    "store_type": "Store Type"
}

Example output:
{
    "date": "07042017",
    "total_amount": 29.01,
    "items": [
        {"name": "Unknown Item", "quantity": 1, "price": 25.23}
    ],
    "tax": 3.78,
    "store_name": "Main Street Restaurant",
    "address": "6332 Business Drive Suite 528 Palo Alto California 94301",
    "phone_number": "575-1628095",
    "store_type": "Restaurant"
}"#;
