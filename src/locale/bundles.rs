use super::{Labels, Language, NumberFormat, PaymentMethodNames, TaxLabels};
use crate::core::TaxSystem;

const fn tax(
    percent: &'static str,
    amount: &'static str,
    total: &'static str,
    id: &'static str,
) -> TaxLabels {
    TaxLabels {
        percent,
        amount,
        total,
        id,
    }
}

pub(super) fn tax_labels(language: Language, system: TaxSystem) -> TaxLabels {
    use Language::*;
    use TaxSystem::*;

    match (language, system) {
        (En, Vat) => tax("VAT %", "VAT", "Total VAT", "VAT ID"),
        (En, Gst) => tax("GST %", "GST", "Total GST", "GST No."),
        (En, SalesTax) => tax("Sales Tax %", "Sales Tax", "Total Sales Tax", "Tax ID"),
        (En, None) => tax("Tax %", "Tax", "Total Tax", "Tax ID"),

        (De, Vat) => tax("MwSt. %", "MwSt.", "MwSt. gesamt", "USt-IdNr."),
        (De, Gst) => tax("GST %", "GST", "GST gesamt", "GST-Nr."),
        (De, SalesTax) => tax("Umsatzsteuer %", "Umsatzsteuer", "Umsatzsteuer gesamt", "Steuernummer"),
        (De, None) => tax("Steuer %", "Steuer", "Steuer gesamt", "Steuernummer"),

        (Es, Vat) => tax("IVA %", "IVA", "Total IVA", "NIF-IVA"),
        (Es, Gst) => tax("GST %", "GST", "Total GST", "N.º GST"),
        (Es, SalesTax) => tax("Imp. ventas %", "Imp. ventas", "Total imp. ventas", "ID fiscal"),
        (Es, None) => tax("Impuesto %", "Impuesto", "Total impuestos", "ID fiscal"),

        (Fr, Vat) => tax("TVA %", "TVA", "Total TVA", "N° TVA"),
        (Fr, Gst) => tax("TPS %", "TPS", "Total TPS", "N° TPS"),
        (Fr, SalesTax) => tax("Taxe de vente %", "Taxe de vente", "Total taxe de vente", "N° fiscal"),
        (Fr, None) => tax("Taxe %", "Taxe", "Total taxes", "N° fiscal"),

        (Pl, Vat) => tax("VAT %", "VAT", "Suma VAT", "NIP"),
        (Pl, Gst) => tax("GST %", "GST", "Suma GST", "Nr GST"),
        (Pl, SalesTax) => tax("Podatek od sprzedaży %", "Podatek od sprzedaży", "Suma podatku od sprzedaży", "NIP"),
        (Pl, None) => tax("Podatek %", "Podatek", "Suma podatku", "NIP"),

        (Ru, Vat) => tax("НДС %", "НДС", "Итого НДС", "ИНН"),
        (Ru, Gst) => tax("GST %", "GST", "Итого GST", "Номер GST"),
        (Ru, SalesTax) => tax("Налог с продаж %", "Налог с продаж", "Итого налог с продаж", "ИНН"),
        (Ru, None) => tax("Налог %", "Налог", "Итого налог", "ИНН"),
    }
}

pub(super) fn bundle(language: Language, tax: TaxLabels) -> Labels {
    match language {
        Language::En => Labels {
            language,
            invoice_title: "INVOICE",
            invoice_number: "Invoice No.",
            issue_date: "Issue date",
            due_date: "Due date",
            reference_number: "Reference",
            customer_reference: "Customer reference",
            order_number: "Order number",
            from: "From",
            bill_to: "Bill to",
            company_id: "Company ID",
            email: "Email",
            website: "Website",
            payment_details: "Payment details",
            payment_method: "Payment method",
            bank_account: "Bank account",
            iban: "IBAN",
            swift: "SWIFT/BIC",
            description: "Description",
            quantity: "Qty",
            unit_price: "Unit price",
            net_price: "Net",
            total: "Total",
            notes: "Notes",
            subtotal: "Subtotal",
            grand_total: "Total due",
            paid_marker: "PAID",
            reverse_charge: "Reverse charge: VAT to be accounted for by the recipient.",
            page_template: "Page {page} of {pages}",
            created_with: "Created with",
            payment_methods: PaymentMethodNames {
                bank_transfer: "Bank transfer",
                cash: "Cash",
                credit_card: "Credit card",
                paypal: "PayPal",
                wise: "Wise",
                unknown: "Other",
            },
            tax,
            date_format: "%Y-%m-%d",
            number_format: NumberFormat {
                decimal: '.',
                group: Some(','),
                symbol_first: true,
            },
        },
        Language::De => Labels {
            language,
            invoice_title: "RECHNUNG",
            invoice_number: "Rechnungsnr.",
            issue_date: "Rechnungsdatum",
            due_date: "Fällig am",
            reference_number: "Referenz",
            customer_reference: "Kundenreferenz",
            order_number: "Bestellnummer",
            from: "Von",
            bill_to: "Rechnung an",
            company_id: "Handelsregister",
            email: "E-Mail",
            website: "Webseite",
            payment_details: "Zahlungsinformationen",
            payment_method: "Zahlungsart",
            bank_account: "Kontonummer",
            iban: "IBAN",
            swift: "SWIFT/BIC",
            description: "Beschreibung",
            quantity: "Menge",
            unit_price: "Einzelpreis",
            net_price: "Netto",
            total: "Gesamt",
            notes: "Anmerkungen",
            subtotal: "Zwischensumme",
            grand_total: "Gesamtbetrag",
            paid_marker: "BEZAHLT",
            reverse_charge: "Steuerschuldnerschaft des Leistungsempfängers (Reverse Charge).",
            page_template: "Seite {page} von {pages}",
            created_with: "Erstellt mit",
            payment_methods: PaymentMethodNames {
                bank_transfer: "Überweisung",
                cash: "Barzahlung",
                credit_card: "Kreditkarte",
                paypal: "PayPal",
                wise: "Wise",
                unknown: "Sonstige",
            },
            tax,
            date_format: "%d.%m.%Y",
            number_format: NumberFormat {
                decimal: ',',
                group: Some('.'),
                symbol_first: false,
            },
        },
        Language::Es => Labels {
            language,
            invoice_title: "FACTURA",
            invoice_number: "N.º de factura",
            issue_date: "Fecha de emisión",
            due_date: "Fecha de vencimiento",
            reference_number: "Referencia",
            customer_reference: "Referencia del cliente",
            order_number: "N.º de pedido",
            from: "De",
            bill_to: "Facturar a",
            company_id: "N.º de registro",
            email: "Correo",
            website: "Sitio web",
            payment_details: "Datos de pago",
            payment_method: "Método de pago",
            bank_account: "Cuenta bancaria",
            iban: "IBAN",
            swift: "SWIFT/BIC",
            description: "Descripción",
            quantity: "Cant.",
            unit_price: "Precio unit.",
            net_price: "Neto",
            total: "Total",
            notes: "Notas",
            subtotal: "Subtotal",
            grand_total: "Total a pagar",
            paid_marker: "PAGADO",
            reverse_charge: "Inversión del sujeto pasivo: el IVA debe ser liquidado por el destinatario.",
            page_template: "Página {page} de {pages}",
            created_with: "Creado con",
            payment_methods: PaymentMethodNames {
                bank_transfer: "Transferencia bancaria",
                cash: "Efectivo",
                credit_card: "Tarjeta de crédito",
                paypal: "PayPal",
                wise: "Wise",
                unknown: "Otro",
            },
            tax,
            date_format: "%d/%m/%Y",
            number_format: NumberFormat {
                decimal: ',',
                group: Some('.'),
                symbol_first: false,
            },
        },
        Language::Fr => Labels {
            language,
            invoice_title: "FACTURE",
            invoice_number: "N° de facture",
            issue_date: "Date d'émission",
            due_date: "Date d'échéance",
            reference_number: "Référence",
            customer_reference: "Référence client",
            order_number: "N° de commande",
            from: "De",
            bill_to: "Facturer à",
            company_id: "SIRET",
            email: "E-mail",
            website: "Site web",
            payment_details: "Informations de paiement",
            payment_method: "Mode de paiement",
            bank_account: "Compte bancaire",
            iban: "IBAN",
            swift: "SWIFT/BIC",
            description: "Désignation",
            quantity: "Qté",
            unit_price: "Prix unit.",
            net_price: "HT",
            total: "TTC",
            notes: "Remarques",
            subtotal: "Sous-total",
            grand_total: "Total à payer",
            paid_marker: "PAYÉ",
            reverse_charge: "Autoliquidation : TVA due par le preneur.",
            page_template: "Page {page} sur {pages}",
            created_with: "Créé avec",
            payment_methods: PaymentMethodNames {
                bank_transfer: "Virement bancaire",
                cash: "Espèces",
                credit_card: "Carte de crédit",
                paypal: "PayPal",
                wise: "Wise",
                unknown: "Autre",
            },
            tax,
            date_format: "%d/%m/%Y",
            number_format: NumberFormat {
                decimal: ',',
                group: Some(' '),
                symbol_first: false,
            },
        },
        Language::Pl => Labels {
            language,
            invoice_title: "FAKTURA",
            invoice_number: "Nr faktury",
            issue_date: "Data wystawienia",
            due_date: "Termin płatności",
            reference_number: "Numer referencyjny",
            customer_reference: "Numer klienta",
            order_number: "Numer zamówienia",
            from: "Sprzedawca",
            bill_to: "Nabywca",
            company_id: "REGON",
            email: "E-mail",
            website: "Strona www",
            payment_details: "Dane do płatności",
            payment_method: "Metoda płatności",
            bank_account: "Numer konta",
            iban: "IBAN",
            swift: "SWIFT/BIC",
            description: "Opis",
            quantity: "Ilość",
            unit_price: "Cena jedn.",
            net_price: "Netto",
            total: "Brutto",
            notes: "Uwagi",
            subtotal: "Suma netto",
            grand_total: "Do zapłaty",
            paid_marker: "ZAPŁACONO",
            reverse_charge: "Odwrotne obciążenie: VAT rozlicza nabywca.",
            page_template: "Strona {page} z {pages}",
            created_with: "Utworzono za pomocą",
            payment_methods: PaymentMethodNames {
                bank_transfer: "Przelew bankowy",
                cash: "Gotówka",
                credit_card: "Karta kredytowa",
                paypal: "PayPal",
                wise: "Wise",
                unknown: "Inna",
            },
            tax,
            date_format: "%d.%m.%Y",
            number_format: NumberFormat {
                decimal: ',',
                group: Some(' '),
                symbol_first: false,
            },
        },
        Language::Ru => Labels {
            language,
            invoice_title: "СЧЁТ",
            invoice_number: "Счёт №",
            issue_date: "Дата выставления",
            due_date: "Срок оплаты",
            reference_number: "Референс",
            customer_reference: "Номер клиента",
            order_number: "Номер заказа",
            from: "Продавец",
            bill_to: "Покупатель",
            company_id: "ОГРН",
            email: "Эл. почта",
            website: "Сайт",
            payment_details: "Платёжные реквизиты",
            payment_method: "Способ оплаты",
            bank_account: "Расчётный счёт",
            iban: "IBAN",
            swift: "SWIFT/BIC",
            description: "Описание",
            quantity: "Кол-во",
            unit_price: "Цена за ед.",
            net_price: "Нетто",
            total: "Итого",
            notes: "Примечания",
            subtotal: "Подытог",
            grand_total: "Итого к оплате",
            paid_marker: "ОПЛАЧЕНО",
            reverse_charge: "Обратное начисление: НДС уплачивается покупателем.",
            page_template: "Страница {page} из {pages}",
            created_with: "Создано с помощью",
            payment_methods: PaymentMethodNames {
                bank_transfer: "Банковский перевод",
                cash: "Наличные",
                credit_card: "Кредитная карта",
                paypal: "PayPal",
                wise: "Wise",
                unknown: "Другое",
            },
            tax,
            date_format: "%d.%m.%Y",
            number_format: NumberFormat {
                decimal: ',',
                group: Some(' '),
                symbol_first: false,
            },
        },
    }
}
