use crate::models::Language;

// (key, en, ar) — process-wide constant data, never mutated at runtime.
const TRANSLATIONS: &[(&str, &str, &str)] = &[
    ("appName", "Finance Tracker", "المتتبع المالي"),
    ("welcome", "Welcome back! Sign in to continue.", "أهلاً بك! سجّل الدخول للمتابعة."),
    ("login", "Sign In", "تسجيل الدخول"),
    ("logout", "Sign Out", "تسجيل الخروج"),
    ("language", "Language", "اللغة"),
    ("english", "English", "الإنجليزية"),
    ("arabic", "Arabic", "العربية"),
    ("dashboard", "Dashboard", "لوحة التحكم"),
    ("monthly", "Monthly", "شهري"),
    ("annually", "Annually", "سنوي"),
    ("totalIncome", "Total Income", "إجمالي الدخل"),
    ("totalExpenses", "Total Expenses", "إجمالي المصروفات"),
    ("netProfit", "Net Profit", "صافي الربح"),
    ("loss", "Loss", "خسارة"),
    ("expensesByCategory", "Expenses by Category", "المصروفات حسب الفئة"),
    ("noExpenseData", "No expense data to display.", "لا توجد بيانات مصروفات لعرضها."),
    ("transactions", "Transactions", "المعاملات"),
    ("noTransactions", "No transactions yet.", "لا توجد معاملات بعد."),
    ("addTransaction", "Add Transaction", "إضافة معاملة"),
    ("editTransaction", "Edit Transaction", "تعديل المعاملة"),
    ("description", "Description", "الوصف"),
    ("amount", "Amount", "المبلغ"),
    ("date", "Date", "التاريخ"),
    ("type", "Type", "النوع"),
    ("category", "Category", "الفئة"),
    ("income", "Income", "دخل"),
    ("expense", "Expense", "مصروف"),
    ("selectCategory", "Select a category", "اختر فئة"),
    ("save", "Save", "حفظ"),
    ("cancel", "Cancel", "إلغاء"),
    ("edit", "Edit", "تعديل"),
    ("delete", "Delete", "حذف"),
    (
        "confirmDelete",
        "Are you sure you want to delete this transaction?",
        "هل أنت متأكد من حذف هذه المعاملة؟",
    ),
    ("adviceFromAI", "AI Financial Advice", "نصيحة مالية من الذكاء الاصطناعي"),
    ("getFinancialAdvice", "Get Financial Advice", "احصل على نصيحة مالية"),
    ("generatingAdvice", "Generating advice...", "جارٍ إنشاء النصيحة..."),
    (
        "apiKeyMissing",
        "API key is not configured. Please check the setup.",
        "مفتاح API غير مهيأ. يرجى التحقق من الإعدادات.",
    ),
    (
        "adviceError",
        "Sorry, an error occurred while generating financial advice.",
        "عذرًا، حدث خطأ أثناء إنشاء النصيحة المالية.",
    ),
];

/// Look up a display string for the active language. A key missing from
/// the table comes back verbatim — there is no cross-language fallback.
pub fn tr<'a>(lang: Language, key: &'a str) -> &'a str {
    for (k, en, ar) in TRANSLATIONS {
        if *k == key {
            return match lang {
                Language::En => en,
                Language::Ar => ar,
            };
        }
    }
    key
}
