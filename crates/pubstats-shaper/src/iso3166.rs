//! ISO 3166-1 country codes and ISO 3166-2 subdivisions used for
//! affiliation normalization

/// ISO 3166-1 alpha-2 code and English short name
pub static COUNTRIES: &[(&str, &str)] = &[
    ("AD", "Andorra"),
    ("AE", "United Arab Emirates"),
    ("AF", "Afghanistan"),
    ("AG", "Antigua and Barbuda"),
    ("AI", "Anguilla"),
    ("AL", "Albania"),
    ("AM", "Armenia"),
    ("AO", "Angola"),
    ("AQ", "Antarctica"),
    ("AR", "Argentina"),
    ("AS", "American Samoa"),
    ("AT", "Austria"),
    ("AU", "Australia"),
    ("AW", "Aruba"),
    ("AX", "Aland Islands"),
    ("AZ", "Azerbaijan"),
    ("BA", "Bosnia and Herzegovina"),
    ("BB", "Barbados"),
    ("BD", "Bangladesh"),
    ("BE", "Belgium"),
    ("BF", "Burkina Faso"),
    ("BG", "Bulgaria"),
    ("BH", "Bahrain"),
    ("BI", "Burundi"),
    ("BJ", "Benin"),
    ("BL", "Saint Barthelemy"),
    ("BM", "Bermuda"),
    ("BN", "Brunei Darussalam"),
    ("BO", "Bolivia"),
    ("BQ", "Bonaire, Sint Eustatius and Saba"),
    ("BR", "Brazil"),
    ("BS", "Bahamas"),
    ("BT", "Bhutan"),
    ("BV", "Bouvet Island"),
    ("BW", "Botswana"),
    ("BY", "Belarus"),
    ("BZ", "Belize"),
    ("CA", "Canada"),
    ("CC", "Cocos (Keeling) Islands"),
    ("CD", "Congo, The Democratic Republic of the"),
    ("CF", "Central African Republic"),
    ("CG", "Congo"),
    ("CH", "Switzerland"),
    ("CI", "Cote d'Ivoire"),
    ("CK", "Cook Islands"),
    ("CL", "Chile"),
    ("CM", "Cameroon"),
    ("CN", "China"),
    ("CO", "Colombia"),
    ("CR", "Costa Rica"),
    ("CU", "Cuba"),
    ("CV", "Cabo Verde"),
    ("CW", "Curacao"),
    ("CX", "Christmas Island"),
    ("CY", "Cyprus"),
    ("CZ", "Czechia"),
    ("DE", "Germany"),
    ("DJ", "Djibouti"),
    ("DK", "Denmark"),
    ("DM", "Dominica"),
    ("DO", "Dominican Republic"),
    ("DZ", "Algeria"),
    ("EC", "Ecuador"),
    ("EE", "Estonia"),
    ("EG", "Egypt"),
    ("EH", "Western Sahara"),
    ("ER", "Eritrea"),
    ("ES", "Spain"),
    ("ET", "Ethiopia"),
    ("FI", "Finland"),
    ("FJ", "Fiji"),
    ("FK", "Falkland Islands (Malvinas)"),
    ("FM", "Micronesia, Federated States of"),
    ("FO", "Faroe Islands"),
    ("FR", "France"),
    ("GA", "Gabon"),
    ("GB", "United Kingdom"),
    ("GD", "Grenada"),
    ("GE", "Georgia"),
    ("GF", "French Guiana"),
    ("GG", "Guernsey"),
    ("GH", "Ghana"),
    ("GI", "Gibraltar"),
    ("GL", "Greenland"),
    ("GM", "Gambia"),
    ("GN", "Guinea"),
    ("GP", "Guadeloupe"),
    ("GQ", "Equatorial Guinea"),
    ("GR", "Greece"),
    ("GS", "South Georgia and the South Sandwich Islands"),
    ("GT", "Guatemala"),
    ("GU", "Guam"),
    ("GW", "Guinea-Bissau"),
    ("GY", "Guyana"),
    ("HK", "Hong Kong"),
    ("HM", "Heard Island and McDonald Islands"),
    ("HN", "Honduras"),
    ("HR", "Croatia"),
    ("HT", "Haiti"),
    ("HU", "Hungary"),
    ("ID", "Indonesia"),
    ("IE", "Ireland"),
    ("IL", "Israel"),
    ("IM", "Isle of Man"),
    ("IN", "India"),
    ("IO", "British Indian Ocean Territory"),
    ("IQ", "Iraq"),
    ("IR", "Iran"),
    ("IS", "Iceland"),
    ("IT", "Italy"),
    ("JE", "Jersey"),
    ("JM", "Jamaica"),
    ("JO", "Jordan"),
    ("JP", "Japan"),
    ("KE", "Kenya"),
    ("KG", "Kyrgyzstan"),
    ("KH", "Cambodia"),
    ("KI", "Kiribati"),
    ("KM", "Comoros"),
    ("KN", "Saint Kitts and Nevis"),
    ("KP", "North Korea"),
    ("KR", "South Korea"),
    ("KW", "Kuwait"),
    ("KY", "Cayman Islands"),
    ("KZ", "Kazakhstan"),
    ("LA", "Lao People's Democratic Republic"),
    ("LB", "Lebanon"),
    ("LC", "Saint Lucia"),
    ("LI", "Liechtenstein"),
    ("LK", "Sri Lanka"),
    ("LR", "Liberia"),
    ("LS", "Lesotho"),
    ("LT", "Lithuania"),
    ("LU", "Luxembourg"),
    ("LV", "Latvia"),
    ("LY", "Libya"),
    ("MA", "Morocco"),
    ("MC", "Monaco"),
    ("MD", "Moldova"),
    ("ME", "Montenegro"),
    ("MF", "Saint Martin (French part)"),
    ("MG", "Madagascar"),
    ("MH", "Marshall Islands"),
    ("MK", "North Macedonia"),
    ("ML", "Mali"),
    ("MM", "Myanmar"),
    ("MN", "Mongolia"),
    ("MO", "Macao"),
    ("MP", "Northern Mariana Islands"),
    ("MQ", "Martinique"),
    ("MR", "Mauritania"),
    ("MS", "Montserrat"),
    ("MT", "Malta"),
    ("MU", "Mauritius"),
    ("MV", "Maldives"),
    ("MW", "Malawi"),
    ("MX", "Mexico"),
    ("MY", "Malaysia"),
    ("MZ", "Mozambique"),
    ("NA", "Namibia"),
    ("NC", "New Caledonia"),
    ("NE", "Niger"),
    ("NF", "Norfolk Island"),
    ("NG", "Nigeria"),
    ("NI", "Nicaragua"),
    ("NL", "Netherlands"),
    ("NO", "Norway"),
    ("NP", "Nepal"),
    ("NR", "Nauru"),
    ("NU", "Niue"),
    ("NZ", "New Zealand"),
    ("OM", "Oman"),
    ("PA", "Panama"),
    ("PE", "Peru"),
    ("PF", "French Polynesia"),
    ("PG", "Papua New Guinea"),
    ("PH", "Philippines"),
    ("PK", "Pakistan"),
    ("PL", "Poland"),
    ("PM", "Saint Pierre and Miquelon"),
    ("PN", "Pitcairn"),
    ("PR", "Puerto Rico"),
    ("PS", "Palestine, State of"),
    ("PT", "Portugal"),
    ("PW", "Palau"),
    ("PY", "Paraguay"),
    ("QA", "Qatar"),
    ("RE", "Reunion"),
    ("RO", "Romania"),
    ("RS", "Serbia"),
    ("RU", "Russian Federation"),
    ("RW", "Rwanda"),
    ("SA", "Saudi Arabia"),
    ("SB", "Solomon Islands"),
    ("SC", "Seychelles"),
    ("SD", "Sudan"),
    ("SE", "Sweden"),
    ("SG", "Singapore"),
    ("SH", "Saint Helena, Ascension and Tristan da Cunha"),
    ("SI", "Slovenia"),
    ("SJ", "Svalbard and Jan Mayen"),
    ("SK", "Slovakia"),
    ("SL", "Sierra Leone"),
    ("SM", "San Marino"),
    ("SN", "Senegal"),
    ("SO", "Somalia"),
    ("SR", "Suriname"),
    ("SS", "South Sudan"),
    ("ST", "Sao Tome and Principe"),
    ("SV", "El Salvador"),
    ("SX", "Sint Maarten (Dutch part)"),
    ("SY", "Syrian Arab Republic"),
    ("SZ", "Eswatini"),
    ("TC", "Turks and Caicos Islands"),
    ("TD", "Chad"),
    ("TF", "French Southern Territories"),
    ("TG", "Togo"),
    ("TH", "Thailand"),
    ("TJ", "Tajikistan"),
    ("TK", "Tokelau"),
    ("TL", "Timor-Leste"),
    ("TM", "Turkmenistan"),
    ("TN", "Tunisia"),
    ("TO", "Tonga"),
    ("TR", "Turkey"),
    ("TT", "Trinidad and Tobago"),
    ("TV", "Tuvalu"),
    ("TW", "Taiwan"),
    ("TZ", "Tanzania"),
    ("UA", "Ukraine"),
    ("UG", "Uganda"),
    ("UM", "United States Minor Outlying Islands"),
    ("US", "United States"),
    ("UY", "Uruguay"),
    ("UZ", "Uzbekistan"),
    ("VA", "Holy See (Vatican City State)"),
    ("VC", "Saint Vincent and the Grenadines"),
    ("VE", "Venezuela"),
    ("VG", "Virgin Islands, British"),
    ("VI", "Virgin Islands, U.S."),
    ("VN", "Viet Nam"),
    ("VU", "Vanuatu"),
    ("WF", "Wallis and Futuna"),
    ("WS", "Samoa"),
    ("YE", "Yemen"),
    ("YT", "Mayotte"),
    ("ZA", "South Africa"),
    ("ZM", "Zambia"),
    ("ZW", "Zimbabwe"),
];

/// Local-language and common alternative country names found in affiliations
pub static COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("Brasil", "BR"),
    ("México", "MX"),
    ("España", "ES"),
    ("Perú", "PE"),
    ("Estados Unidos", "US"),
    ("USA", "US"),
    ("United States of America", "US"),
    ("UK", "GB"),
    ("England", "GB"),
    ("Reino Unido", "GB"),
    ("Alemania", "DE"),
    ("Alemanha", "DE"),
    ("Francia", "FR"),
    ("França", "FR"),
    ("Italia", "IT"),
    ("Itália", "IT"),
    ("Suiza", "CH"),
    ("Suíça", "CH"),
    ("Holanda", "NL"),
    ("Países Bajos", "NL"),
    ("Bélgica", "BE"),
    ("Canadá", "CA"),
    ("Japón", "JP"),
    ("Japão", "JP"),
    ("Sudáfrica", "ZA"),
    ("África do Sul", "ZA"),
    ("Panamá", "PA"),
    ("República Dominicana", "DO"),
    ("Venezuela, Bolivarian Republic of", "VE"),
    ("Bolivia, Plurinational State of", "BO"),
    ("Korea, Republic of", "KR"),
    ("Iran, Islamic Republic of", "IR"),
    ("Russia", "RU"),
];

/// ISO 3166-2 division code and name, for the countries that publish in the
/// catalog's collections
pub static DIVISIONS: &[(&str, &str)] = &[
    // Argentina
    ("AR-B", "Buenos Aires"),
    ("AR-C", "Ciudad Autónoma de Buenos Aires"),
    ("AR-K", "Catamarca"),
    ("AR-H", "Chaco"),
    ("AR-U", "Chubut"),
    ("AR-X", "Córdoba"),
    ("AR-W", "Corrientes"),
    ("AR-E", "Entre Ríos"),
    ("AR-P", "Formosa"),
    ("AR-Y", "Jujuy"),
    ("AR-L", "La Pampa"),
    ("AR-F", "La Rioja"),
    ("AR-M", "Mendoza"),
    ("AR-N", "Misiones"),
    ("AR-Q", "Neuquén"),
    ("AR-R", "Río Negro"),
    ("AR-A", "Salta"),
    ("AR-J", "San Juan"),
    ("AR-D", "San Luis"),
    ("AR-Z", "Santa Cruz"),
    ("AR-S", "Santa Fe"),
    ("AR-G", "Santiago del Estero"),
    ("AR-V", "Tierra del Fuego"),
    ("AR-T", "Tucumán"),
    // Brazil
    ("BR-AC", "Acre"),
    ("BR-AL", "Alagoas"),
    ("BR-AP", "Amapá"),
    ("BR-AM", "Amazonas"),
    ("BR-BA", "Bahia"),
    ("BR-CE", "Ceará"),
    ("BR-DF", "Distrito Federal"),
    ("BR-ES", "Espírito Santo"),
    ("BR-GO", "Goiás"),
    ("BR-MA", "Maranhão"),
    ("BR-MT", "Mato Grosso"),
    ("BR-MS", "Mato Grosso do Sul"),
    ("BR-MG", "Minas Gerais"),
    ("BR-PA", "Pará"),
    ("BR-PB", "Paraíba"),
    ("BR-PR", "Paraná"),
    ("BR-PE", "Pernambuco"),
    ("BR-PI", "Piauí"),
    ("BR-RJ", "Rio de Janeiro"),
    ("BR-RN", "Rio Grande do Norte"),
    ("BR-RS", "Rio Grande do Sul"),
    ("BR-RO", "Rondônia"),
    ("BR-RR", "Roraima"),
    ("BR-SC", "Santa Catarina"),
    ("BR-SP", "São Paulo"),
    ("BR-SE", "Sergipe"),
    ("BR-TO", "Tocantins"),
    // Chile
    ("CL-AI", "Aisén del General Carlos Ibáñez del Campo"),
    ("CL-AN", "Antofagasta"),
    ("CL-AP", "Arica y Parinacota"),
    ("CL-AR", "La Araucanía"),
    ("CL-AT", "Atacama"),
    ("CL-BI", "Biobío"),
    ("CL-CO", "Coquimbo"),
    ("CL-LI", "Libertador General Bernardo O'Higgins"),
    ("CL-LL", "Los Lagos"),
    ("CL-LR", "Los Ríos"),
    ("CL-MA", "Magallanes"),
    ("CL-ML", "Maule"),
    ("CL-NB", "Ñuble"),
    ("CL-RM", "Región Metropolitana de Santiago"),
    ("CL-TA", "Tarapacá"),
    ("CL-VS", "Valparaíso"),
    // Colombia
    ("CO-AMA", "Amazonas"),
    ("CO-ANT", "Antioquia"),
    ("CO-ARA", "Arauca"),
    ("CO-ATL", "Atlántico"),
    ("CO-BOL", "Bolívar"),
    ("CO-BOY", "Boyacá"),
    ("CO-CAL", "Caldas"),
    ("CO-CAQ", "Caquetá"),
    ("CO-CAS", "Casanare"),
    ("CO-CAU", "Cauca"),
    ("CO-CES", "Cesar"),
    ("CO-CHO", "Chocó"),
    ("CO-COR", "Córdoba"),
    ("CO-CUN", "Cundinamarca"),
    ("CO-DC", "Distrito Capital de Bogotá"),
    ("CO-GUA", "Guainía"),
    ("CO-GUV", "Guaviare"),
    ("CO-HUI", "Huila"),
    ("CO-LAG", "La Guajira"),
    ("CO-MAG", "Magdalena"),
    ("CO-MET", "Meta"),
    ("CO-NAR", "Nariño"),
    ("CO-NSA", "Norte de Santander"),
    ("CO-PUT", "Putumayo"),
    ("CO-QUI", "Quindío"),
    ("CO-RIS", "Risaralda"),
    ("CO-SAP", "San Andrés, Providencia y Santa Catalina"),
    ("CO-SAN", "Santander"),
    ("CO-SUC", "Sucre"),
    ("CO-TOL", "Tolima"),
    ("CO-VAC", "Valle del Cauca"),
    ("CO-VAU", "Vaupés"),
    ("CO-VID", "Vichada"),
    // Mexico
    ("MX-AGU", "Aguascalientes"),
    ("MX-BCN", "Baja California"),
    ("MX-BCS", "Baja California Sur"),
    ("MX-CAM", "Campeche"),
    ("MX-CHP", "Chiapas"),
    ("MX-CHH", "Chihuahua"),
    ("MX-CMX", "Ciudad de México"),
    ("MX-COA", "Coahuila de Zaragoza"),
    ("MX-COL", "Colima"),
    ("MX-DUR", "Durango"),
    ("MX-GUA", "Guanajuato"),
    ("MX-GRO", "Guerrero"),
    ("MX-HID", "Hidalgo"),
    ("MX-JAL", "Jalisco"),
    ("MX-MEX", "México"),
    ("MX-MIC", "Michoacán de Ocampo"),
    ("MX-MOR", "Morelos"),
    ("MX-NAY", "Nayarit"),
    ("MX-NLE", "Nuevo León"),
    ("MX-OAX", "Oaxaca"),
    ("MX-PUE", "Puebla"),
    ("MX-QUE", "Querétaro"),
    ("MX-ROO", "Quintana Roo"),
    ("MX-SLP", "San Luis Potosí"),
    ("MX-SIN", "Sinaloa"),
    ("MX-SON", "Sonora"),
    ("MX-TAB", "Tabasco"),
    ("MX-TAM", "Tamaulipas"),
    ("MX-TLA", "Tlaxcala"),
    ("MX-VER", "Veracruz de Ignacio de la Llave"),
    ("MX-YUC", "Yucatán"),
    ("MX-ZAC", "Zacatecas"),
    // Peru
    ("PE-AMA", "Amazonas"),
    ("PE-ANC", "Áncash"),
    ("PE-APU", "Apurímac"),
    ("PE-ARE", "Arequipa"),
    ("PE-AYA", "Ayacucho"),
    ("PE-CAJ", "Cajamarca"),
    ("PE-CAL", "El Callao"),
    ("PE-CUS", "Cusco"),
    ("PE-HUV", "Huancavelica"),
    ("PE-HUC", "Huánuco"),
    ("PE-ICA", "Ica"),
    ("PE-JUN", "Junín"),
    ("PE-LAL", "La Libertad"),
    ("PE-LAM", "Lambayeque"),
    ("PE-LIM", "Lima"),
    ("PE-LOR", "Loreto"),
    ("PE-MDD", "Madre de Dios"),
    ("PE-MOQ", "Moquegua"),
    ("PE-PAS", "Pasco"),
    ("PE-PIU", "Piura"),
    ("PE-PUN", "Puno"),
    ("PE-SAM", "San Martín"),
    ("PE-TAC", "Tacna"),
    ("PE-TUM", "Tumbes"),
    ("PE-UCA", "Ucayali"),
    // Portugal
    ("PT-01", "Aveiro"),
    ("PT-02", "Beja"),
    ("PT-03", "Braga"),
    ("PT-04", "Bragança"),
    ("PT-05", "Castelo Branco"),
    ("PT-06", "Coimbra"),
    ("PT-07", "Évora"),
    ("PT-08", "Faro"),
    ("PT-09", "Guarda"),
    ("PT-10", "Leiria"),
    ("PT-11", "Lisboa"),
    ("PT-12", "Portalegre"),
    ("PT-13", "Porto"),
    ("PT-14", "Santarém"),
    ("PT-15", "Setúbal"),
    ("PT-16", "Viana do Castelo"),
    ("PT-17", "Vila Real"),
    ("PT-18", "Viseu"),
    ("PT-20", "Região Autónoma dos Açores"),
    ("PT-30", "Região Autónoma da Madeira"),
    // Spain (autonomous communities)
    ("ES-AN", "Andalucía"),
    ("ES-AR", "Aragón"),
    ("ES-AS", "Asturias"),
    ("ES-CN", "Canarias"),
    ("ES-CB", "Cantabria"),
    ("ES-CL", "Castilla y León"),
    ("ES-CM", "Castilla-La Mancha"),
    ("ES-CT", "Catalunya"),
    ("ES-CE", "Ceuta"),
    ("ES-EX", "Extremadura"),
    ("ES-GA", "Galicia"),
    ("ES-IB", "Illes Balears"),
    ("ES-RI", "La Rioja"),
    ("ES-MD", "Madrid"),
    ("ES-ML", "Melilla"),
    ("ES-MC", "Murcia"),
    ("ES-NC", "Navarra"),
    ("ES-PV", "País Vasco"),
    ("ES-VC", "Valenciana"),
    // South Africa
    ("ZA-EC", "Eastern Cape"),
    ("ZA-FS", "Free State"),
    ("ZA-GP", "Gauteng"),
    ("ZA-KZN", "KwaZulu-Natal"),
    ("ZA-LP", "Limpopo"),
    ("ZA-MP", "Mpumalanga"),
    ("ZA-NC", "Northern Cape"),
    ("ZA-NW", "North West"),
    ("ZA-WC", "Western Cape"),
    // Uruguay
    ("UY-AR", "Artigas"),
    ("UY-CA", "Canelones"),
    ("UY-CL", "Cerro Largo"),
    ("UY-CO", "Colonia"),
    ("UY-DU", "Durazno"),
    ("UY-FS", "Flores"),
    ("UY-FD", "Florida"),
    ("UY-LA", "Lavalleja"),
    ("UY-MA", "Maldonado"),
    ("UY-MO", "Montevideo"),
    ("UY-PA", "Paysandú"),
    ("UY-RN", "Río Negro"),
    ("UY-RV", "Rivera"),
    ("UY-RO", "Rocha"),
    ("UY-SA", "Salto"),
    ("UY-SJ", "San José"),
    ("UY-SO", "Soriano"),
    ("UY-TA", "Tacuarembó"),
    ("UY-TT", "Treinta y Tres"),
    // United States
    ("US-AL", "Alabama"),
    ("US-AK", "Alaska"),
    ("US-AZ", "Arizona"),
    ("US-AR", "Arkansas"),
    ("US-CA", "California"),
    ("US-CO", "Colorado"),
    ("US-CT", "Connecticut"),
    ("US-DE", "Delaware"),
    ("US-DC", "District of Columbia"),
    ("US-FL", "Florida"),
    ("US-GA", "Georgia"),
    ("US-HI", "Hawaii"),
    ("US-ID", "Idaho"),
    ("US-IL", "Illinois"),
    ("US-IN", "Indiana"),
    ("US-IA", "Iowa"),
    ("US-KS", "Kansas"),
    ("US-KY", "Kentucky"),
    ("US-LA", "Louisiana"),
    ("US-ME", "Maine"),
    ("US-MD", "Maryland"),
    ("US-MA", "Massachusetts"),
    ("US-MI", "Michigan"),
    ("US-MN", "Minnesota"),
    ("US-MS", "Mississippi"),
    ("US-MO", "Missouri"),
    ("US-MT", "Montana"),
    ("US-NE", "Nebraska"),
    ("US-NV", "Nevada"),
    ("US-NH", "New Hampshire"),
    ("US-NJ", "New Jersey"),
    ("US-NM", "New Mexico"),
    ("US-NY", "New York"),
    ("US-NC", "North Carolina"),
    ("US-ND", "North Dakota"),
    ("US-OH", "Ohio"),
    ("US-OK", "Oklahoma"),
    ("US-OR", "Oregon"),
    ("US-PA", "Pennsylvania"),
    ("US-RI", "Rhode Island"),
    ("US-SC", "South Carolina"),
    ("US-SD", "South Dakota"),
    ("US-TN", "Tennessee"),
    ("US-TX", "Texas"),
    ("US-UT", "Utah"),
    ("US-VT", "Vermont"),
    ("US-VA", "Virginia"),
    ("US-WA", "Washington"),
    ("US-WV", "West Virginia"),
    ("US-WI", "Wisconsin"),
    ("US-WY", "Wyoming"),
];
