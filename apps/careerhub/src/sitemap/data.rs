// Static site tables. Order matters: it is the emission order of every sitemap.

use crate::sitemap::entry::{ChangeFreq, Priority};
use crate::sitemap::taxonomy::{
    City, CorePage, FinancialTip, GuideArticle, Industry, Location, Role, Season, SeasonalEvent,
    Tool,
};

const fn hub_page(path: &'static str, changefreq: ChangeFreq, tenths: u8) -> CorePage {
    CorePage {
        path,
        changefreq,
        priority: Priority::from_tenths(tenths),
    }
}

pub static CORE_PAGES: &[CorePage] = &[
    hub_page("/", ChangeFreq::Weekly, 10),
    hub_page("/career-hub", ChangeFreq::Weekly, 9),
    hub_page("/career-hub/roles", ChangeFreq::Weekly, 8),
    hub_page("/career-hub/locations", ChangeFreq::Weekly, 8),
    hub_page("/career-hub/cities", ChangeFreq::Weekly, 8),
    hub_page("/industries", ChangeFreq::Monthly, 8),
    hub_page("/tools", ChangeFreq::Monthly, 8),
    hub_page("/guides", ChangeFreq::Weekly, 8),
    hub_page("/guides/financial-tips", ChangeFreq::Monthly, 7),
    hub_page("/about", ChangeFreq::Monthly, 5),
    hub_page("/contact", ChangeFreq::Monthly, 5),
];

#[rustfmt::skip]
pub static ROLES: &[Role] = &[
    Role { slug: "warehouse-associate", title: "Warehouse Associate", industry: "warehouse" },
    Role { slug: "forklift-driver", title: "Forklift Driver", industry: "warehouse" },
    Role { slug: "picker-packer", title: "Picker Packer", industry: "warehouse" },
    Role { slug: "material-handler", title: "Material Handler", industry: "warehouse" },
    Role { slug: "loader-unloader", title: "Loader / Unloader", industry: "logistics" },
    Role { slug: "delivery-driver", title: "Delivery Driver", industry: "logistics" },
    Role { slug: "assembly-line-worker", title: "Assembly Line Worker", industry: "manufacturing" },
    Role { slug: "machine-operator", title: "Machine Operator", industry: "manufacturing" },
    Role { slug: "bartender", title: "Bartender", industry: "hospitality" },
    Role { slug: "server", title: "Server", industry: "hospitality" },
    Role { slug: "line-cook", title: "Line Cook", industry: "hospitality" },
    Role { slug: "dishwasher", title: "Dishwasher", industry: "hospitality" },
    Role { slug: "banquet-server", title: "Banquet Server", industry: "events" },
    Role { slug: "event-staff", title: "Event Staff", industry: "events" },
    Role { slug: "concessions-worker", title: "Concessions Worker", industry: "events" },
    Role { slug: "retail-associate", title: "Retail Associate", industry: "retail" },
    Role { slug: "cashier", title: "Cashier", industry: "retail" },
    Role { slug: "merchandiser", title: "Merchandiser", industry: "retail" },
    Role { slug: "housekeeper", title: "Housekeeper", industry: "facilities" },
    Role { slug: "janitor", title: "Janitor", industry: "facilities" },
];

#[rustfmt::skip]
pub static LOCATIONS: &[Location] = &[
    Location { slug: "austin", name: "Austin", state: "TX" },
    Location { slug: "dallas", name: "Dallas", state: "TX" },
    Location { slug: "houston", name: "Houston", state: "TX" },
    Location { slug: "san-antonio", name: "San Antonio", state: "TX" },
    Location { slug: "nashville", name: "Nashville", state: "TN" },
    Location { slug: "memphis", name: "Memphis", state: "TN" },
    Location { slug: "atlanta", name: "Atlanta", state: "GA" },
    Location { slug: "phoenix", name: "Phoenix", state: "AZ" },
    Location { slug: "charlotte", name: "Charlotte", state: "NC" },
    Location { slug: "columbus", name: "Columbus", state: "OH" },
    Location { slug: "indianapolis", name: "Indianapolis", state: "IN" },
    Location { slug: "orlando", name: "Orlando", state: "FL" },
];

#[rustfmt::skip]
pub static CITIES: &[City] = &[
    City { slug: "austin", name: "Austin", state: "TX" },
    City { slug: "dallas", name: "Dallas", state: "TX" },
    City { slug: "fort-worth", name: "Fort Worth", state: "TX" },
    City { slug: "houston", name: "Houston", state: "TX" },
    City { slug: "san-antonio", name: "San Antonio", state: "TX" },
    City { slug: "el-paso", name: "El Paso", state: "TX" },
    City { slug: "nashville", name: "Nashville", state: "TN" },
    City { slug: "memphis", name: "Memphis", state: "TN" },
    City { slug: "knoxville", name: "Knoxville", state: "TN" },
    City { slug: "atlanta", name: "Atlanta", state: "GA" },
    City { slug: "savannah", name: "Savannah", state: "GA" },
    City { slug: "phoenix", name: "Phoenix", state: "AZ" },
    City { slug: "tucson", name: "Tucson", state: "AZ" },
    City { slug: "charlotte", name: "Charlotte", state: "NC" },
    City { slug: "raleigh", name: "Raleigh", state: "NC" },
    City { slug: "columbus", name: "Columbus", state: "OH" },
    City { slug: "cincinnati", name: "Cincinnati", state: "OH" },
    City { slug: "cleveland", name: "Cleveland", state: "OH" },
    City { slug: "indianapolis", name: "Indianapolis", state: "IN" },
    City { slug: "orlando", name: "Orlando", state: "FL" },
    City { slug: "tampa", name: "Tampa", state: "FL" },
    City { slug: "miami", name: "Miami", state: "FL" },
    City { slug: "jacksonville", name: "Jacksonville", state: "FL" },
    City { slug: "las-vegas", name: "Las Vegas", state: "NV" },
    City { slug: "denver", name: "Denver", state: "CO" },
    City { slug: "chicago", name: "Chicago", state: "IL" },
    City { slug: "louisville", name: "Louisville", state: "KY" },
    City { slug: "kansas-city", name: "Kansas City", state: "MO" },
];

#[rustfmt::skip]
pub static INDUSTRIES: &[Industry] = &[
    Industry { slug: "warehouse", name: "Warehouse" },
    Industry { slug: "logistics", name: "Logistics" },
    Industry { slug: "manufacturing", name: "Manufacturing" },
    Industry { slug: "hospitality", name: "Hospitality" },
    Industry { slug: "events", name: "Events" },
    Industry { slug: "retail", name: "Retail" },
    Industry { slug: "facilities", name: "Facilities" },
];

#[rustfmt::skip]
pub static TOOLS: &[Tool] = &[
    Tool { slug: "take-home-pay-calculator", name: "Take-Home Pay Calculator" },
    Tool { slug: "hourly-to-salary-calculator", name: "Hourly to Salary Calculator" },
    Tool { slug: "overtime-calculator", name: "Overtime Calculator" },
    Tool { slug: "shift-earnings-calculator", name: "Shift Earnings Calculator" },
    Tool { slug: "resume-builder", name: "Resume Builder" },
    Tool { slug: "cover-letter-generator", name: "Cover Letter Generator" },
];

#[rustfmt::skip]
pub static GUIDES: &[GuideArticle] = &[
    GuideArticle { slug: "how-to-get-hired-fast", title: "How to Get Hired Fast" },
    GuideArticle { slug: "what-is-flexible-work", title: "What Is Flexible Work?" },
    GuideArticle { slug: "first-day-on-a-warehouse-shift", title: "Your First Day on a Warehouse Shift" },
    GuideArticle { slug: "forklift-certification-guide", title: "Forklift Certification Guide" },
    GuideArticle { slug: "food-handler-card-guide", title: "Food Handler Card Guide" },
    GuideArticle { slug: "resume-tips-for-hourly-jobs", title: "Resume Tips for Hourly Jobs" },
    GuideArticle { slug: "interview-questions-for-hourly-jobs", title: "Interview Questions for Hourly Jobs" },
    GuideArticle { slug: "picking-up-extra-shifts", title: "Picking Up Extra Shifts" },
    GuideArticle { slug: "workplace-safety-basics", title: "Workplace Safety Basics" },
];

#[rustfmt::skip]
pub static SEASONAL_GUIDES: &[GuideArticle] = &[
    GuideArticle { slug: "holiday-hiring-guide", title: "Holiday Hiring Guide" },
    GuideArticle { slug: "summer-jobs-guide", title: "Summer Jobs Guide" },
    GuideArticle { slug: "back-to-school-jobs-guide", title: "Back-to-School Jobs Guide" },
    GuideArticle { slug: "peak-season-warehouse-guide", title: "Peak Season Warehouse Guide" },
];

#[rustfmt::skip]
pub static FINANCIAL_TIPS: &[FinancialTip] = &[
    FinancialTip { slug: "budgeting-on-an-hourly-wage", title: "Budgeting on an Hourly Wage" },
    FinancialTip { slug: "understanding-your-paycheck", title: "Understanding Your Paycheck" },
    FinancialTip { slug: "building-an-emergency-fund", title: "Building an Emergency Fund" },
    FinancialTip { slug: "taxes-for-flexible-workers", title: "Taxes for Flexible Workers" },
    FinancialTip { slug: "saving-for-retirement-without-a-401k", title: "Saving for Retirement Without a 401(k)" },
];

#[rustfmt::skip]
pub static SEASONS: &[Season] = &[
    Season { id: "summer", slug: "summer-jobs", location_prefix: "summer-jobs-in" },
    Season { id: "holiday", slug: "holiday-jobs", location_prefix: "holiday-jobs-in" },
    Season { id: "back-to-school", slug: "back-to-school-jobs", location_prefix: "back-to-school-jobs-in" },
    Season { id: "spring", slug: "spring-jobs", location_prefix: "spring-jobs-in" },
];

#[rustfmt::skip]
pub static SEASONAL_EVENTS: &[SeasonalEvent] = &[
    SeasonalEvent { slug: "black-friday", name: "Black Friday", flagship: true },
    SeasonalEvent { slug: "christmas", name: "Christmas", flagship: true },
    SeasonalEvent { slug: "thanksgiving", name: "Thanksgiving", flagship: false },
    SeasonalEvent { slug: "super-bowl", name: "Super Bowl", flagship: false },
    SeasonalEvent { slug: "prime-day", name: "Prime Day", flagship: false },
    SeasonalEvent { slug: "new-years-eve", name: "New Year's Eve", flagship: false },
];
