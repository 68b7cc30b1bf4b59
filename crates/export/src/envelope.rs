//! The import envelope wrapping a company's vouchers.

use tallygen_accounting::{LedgerLine, Voucher};

use crate::xml::XmlElement;

/// Header values fixed by the import format.
pub const VERSION: &str = "1";
pub const TALLY_REQUEST: &str = "Import Data";
pub const REQUEST_TYPE: &str = "Data";
pub const REQUEST_ID: &str = "Transactions";
pub const REPORT_NAME: &str = "All Vouchers";

/// One import document for one company.
#[derive(Debug, Clone, Copy)]
pub struct Envelope<'a> {
    company: &'a str,
    vouchers: &'a [Voucher],
}

impl<'a> Envelope<'a> {
    pub fn new(company: &'a str, vouchers: &'a [Voucher]) -> Self {
        Self { company, vouchers }
    }

    pub fn to_xml(&self) -> XmlElement {
        let header = XmlElement::new("HEADER")
            .child(XmlElement::text("VERSION", VERSION))
            .child(XmlElement::text("TALLYREQUEST", TALLY_REQUEST))
            .child(XmlElement::text("TYPE", REQUEST_TYPE))
            .child(XmlElement::text("ID", REQUEST_ID));

        let request_desc = XmlElement::new("REQUESTDESC")
            .child(XmlElement::text("REPORTNAME", REPORT_NAME))
            .child(
                XmlElement::new("STATICVARIABLES")
                    .child(XmlElement::text("SVCURRENTCOMPANY", self.company)),
            );

        let mut request_data = XmlElement::new("REQUESTDATA");
        for voucher in self.vouchers {
            request_data.push(voucher_element(voucher));
        }

        XmlElement::new("ENVELOPE").child(header).child(
            XmlElement::new("BODY").child(
                XmlElement::new("IMPORTDATA")
                    .child(request_desc)
                    .child(request_data),
            ),
        )
    }

    /// Rendered document text.
    pub fn render(&self) -> String {
        self.to_xml().render()
    }
}

fn voucher_element(voucher: &Voucher) -> XmlElement {
    let mut el = XmlElement::new("VOUCHER")
        .child(XmlElement::text("VOUCHERTYPENAME", voucher.kind().as_str()))
        .child(XmlElement::text("DATE", voucher.date().format("%Y%m%d").to_string()))
        .child(XmlElement::text("VOUCHERNUMBER", voucher.number().to_string()));
    if let Some(narration) = voucher.narration() {
        el.push(XmlElement::text("NARRATION", narration));
    }
    for line in voucher.lines() {
        el.push(ledger_entry(line));
    }
    el
}

fn ledger_entry(line: &LedgerLine) -> XmlElement {
    let mut el = XmlElement::new("ALLLEDGERENTRIES.LIST")
        .child(XmlElement::text("LEDGERNAME", line.ledger.as_str()))
        .child(XmlElement::text("AMOUNT", line.amount.to_string()));
    if let Some(tax) = &line.tax {
        el.push(XmlElement::text("TAXTYPE", tax.tax_type.as_str()));
        el.push(XmlElement::text("TAXRATE", tax.rate.to_string()));
    }
    if let Some(code) = &line.classification {
        el.push(XmlElement::text(code.scheme(), code.code()));
    }
    el
}
